//! Style values: the tagged variants a property can hold.
//!
//! Values are opaque to the update model beyond their tag. The style engine
//! decides whether a value is acceptable for a property.

use std::fmt;

/// A CSS length/number unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Unitless number (`line-height: 1.5`, `outline-offset: 0`).
    Number,
    Px,
    Em,
    Rem,
    Ch,
    Percent,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Fr,
}

impl Unit {
    /// Textual unit name. A bare number is `"number"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Number => "number",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ch => "ch",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Fr => "fr",
        }
    }

    /// Resolve a dimension suffix (`px`, `%`, `REM`) to a unit.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "ch" => Unit::Ch,
            "%" => Unit::Percent,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "fr" => Unit::Fr,
            _ => return None,
        };
        Some(unit)
    }

    fn suffix(self) -> &'static str {
        match self {
            Unit::Number => "",
            other => other.as_str(),
        }
    }
}

/// A property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A number with a unit, e.g. `10px` or a bare `0`.
    Unit { value: f64, unit: Unit },
    /// An identifier such as `hidden` or `auto`.
    Keyword(String),
    /// Explicitly unset.
    Unset,
    /// An sRGB color with alpha in `0.0..=1.0`.
    Rgb { r: u8, g: u8, b: u8, alpha: f32 },
    /// A font family stack.
    FontFamily(Vec<String>),
    /// Several space separated values, e.g. `50% 50%`.
    Tuple(Vec<StyleValue>),
    /// Raw text the engine could not interpret.
    Invalid(String),
}

impl StyleValue {
    /// Create a unit value.
    pub fn unit(value: f64, unit: Unit) -> Self {
        StyleValue::Unit { value, unit }
    }

    /// Create a unitless number value.
    pub fn number(value: f64) -> Self {
        StyleValue::Unit {
            value,
            unit: Unit::Number,
        }
    }

    /// Create a pixel value.
    pub fn px(value: f64) -> Self {
        StyleValue::Unit {
            value,
            unit: Unit::Px,
        }
    }

    /// Create a keyword value.
    pub fn keyword(value: impl Into<String>) -> Self {
        StyleValue::Keyword(value.into())
    }

    /// The variant tag, as used in serialized styles.
    pub fn type_name(&self) -> &'static str {
        match self {
            StyleValue::Unit { .. } => "unit",
            StyleValue::Keyword(_) => "keyword",
            StyleValue::Unset => "unset",
            StyleValue::Rgb { .. } => "rgb",
            StyleValue::FontFamily(_) => "fontFamily",
            StyleValue::Tuple(_) => "tuple",
            StyleValue::Invalid(_) => "invalid",
        }
    }

    /// The keyword text, if this is a keyword.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            StyleValue::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Returns `true` for [`StyleValue::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, StyleValue::Invalid(_))
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}

fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Unit { value, unit } => {
                write_number(f, *value)?;
                f.write_str(unit.suffix())
            }
            StyleValue::Keyword(k) => f.write_str(k),
            StyleValue::Unset => f.write_str("unset"),
            // `#rrggbb[aa]`: must read back through `parse_value`.
            StyleValue::Rgb { r, g, b, alpha } => {
                write!(f, "#{r:02x}{g:02x}{b:02x}")?;
                if *alpha < 1.0 {
                    write!(f, "{:02x}", alpha_byte(*alpha))?;
                }
                Ok(())
            }
            StyleValue::FontFamily(families) => {
                for (i, family) in families.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if family.contains(' ') {
                        write!(f, "\"{family}\"")?;
                    } else {
                        f.write_str(family)?;
                    }
                }
                Ok(())
            }
            StyleValue::Tuple(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            StyleValue::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_display() {
        assert_eq!(StyleValue::number(0.0).to_string(), "0");
        assert_eq!(StyleValue::px(10.0).to_string(), "10px");
        assert_eq!(StyleValue::unit(1.5, Unit::Em).to_string(), "1.5em");
        assert_eq!(StyleValue::unit(50.0, Unit::Percent).to_string(), "50%");
        assert_eq!(StyleValue::unit(-2.0, Unit::Px).to_string(), "-2px");
    }

    #[test]
    fn unit_names() {
        assert_eq!(Unit::Number.as_str(), "number");
        assert_eq!(Unit::from_suffix("PX"), Some(Unit::Px));
        assert_eq!(Unit::from_suffix("%"), Some(Unit::Percent));
        assert_eq!(Unit::from_suffix("furlong"), None);
    }

    #[test]
    fn color_display() {
        let opaque = StyleValue::Rgb { r: 255, g: 0, b: 16, alpha: 1.0 };
        assert_eq!(opaque.to_string(), "#ff0010");
        let translucent = StyleValue::Rgb { r: 0, g: 0, b: 0, alpha: 0.5 };
        assert_eq!(translucent.to_string(), "#00000080");
    }

    #[test]
    fn font_family_quotes_names_with_spaces() {
        let value = StyleValue::FontFamily(vec!["Open Sans".into(), "sans-serif".into()]);
        assert_eq!(value.to_string(), "\"Open Sans\", sans-serif");
    }

    #[test]
    fn tuple_display() {
        let value = StyleValue::Tuple(vec![
            StyleValue::unit(50.0, Unit::Percent),
            StyleValue::keyword("top"),
        ]);
        assert_eq!(value.to_string(), "50% top");
    }

    #[test]
    fn type_names_and_accessors() {
        assert_eq!(StyleValue::Unset.type_name(), "unset");
        assert_eq!(StyleValue::keyword("auto").as_keyword(), Some("auto"));
        assert_eq!(StyleValue::px(1.0).as_keyword(), None);
        assert!(StyleValue::Invalid("10 apples".into()).is_invalid());
    }
}
