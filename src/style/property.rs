//! The fixed set of editable style properties and their static metadata.
//!
//! Every property has a camelCase name (`overflowX`), a CSS name
//! (`overflow-x`), a humanized label for property labels and the keyword
//! items offered by keyword controls. The metadata is pass-through data: it
//! never changes how updates are applied.

use std::fmt;
use std::str::FromStr;

/// Error returned when a name does not match any [`StyleProperty`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style property: {0}")]
pub struct UnknownProperty(pub String);

macro_rules! style_properties {
    ($( $variant:ident => $name:literal, $css:literal; )*) => {
        /// A style property the panels can edit.
        ///
        /// Ordering follows declaration order, which is also the order the
        /// panels list properties in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleProperty {
            $( $variant, )*
        }

        impl StyleProperty {
            /// Every supported property, in declaration order.
            pub const ALL: &'static [StyleProperty] = &[ $( StyleProperty::$variant, )* ];

            /// camelCase name, e.g. `"overflowX"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( StyleProperty::$variant => $name, )*
                }
            }

            /// CSS (kebab-case) name, e.g. `"overflow-x"`.
            pub fn css_name(self) -> &'static str {
                match self {
                    $( StyleProperty::$variant => $css, )*
                }
            }
        }
    };
}

style_properties! {
    // Size
    Width => "width", "width";
    Height => "height", "height";
    MinWidth => "minWidth", "min-width";
    MinHeight => "minHeight", "min-height";
    MaxWidth => "maxWidth", "max-width";
    MaxHeight => "maxHeight", "max-height";
    OverflowX => "overflowX", "overflow-x";
    OverflowY => "overflowY", "overflow-y";
    ObjectFit => "objectFit", "object-fit";
    ObjectPosition => "objectPosition", "object-position";
    AspectRatio => "aspectRatio", "aspect-ratio";

    // Typography
    FontFamily => "fontFamily", "font-family";
    FontWeight => "fontWeight", "font-weight";
    FontSize => "fontSize", "font-size";
    LineHeight => "lineHeight", "line-height";
    Color => "color", "color";
    TextAlign => "textAlign", "text-align";
    FontStyle => "fontStyle", "font-style";
    TextDecorationLine => "textDecorationLine", "text-decoration-line";
    LetterSpacing => "letterSpacing", "letter-spacing";
    TextTransform => "textTransform", "text-transform";
    Direction => "direction", "direction";
    WhiteSpaceCollapse => "whiteSpaceCollapse", "white-space-collapse";
    TextWrapMode => "textWrapMode", "text-wrap-mode";
    TextWrapStyle => "textWrapStyle", "text-wrap-style";
    TextOverflow => "textOverflow", "text-overflow";
    Hyphens => "hyphens", "hyphens";

    // Outline
    OutlineOffset => "outlineOffset", "outline-offset";
}

impl StyleProperty {
    /// Look a property up by its camelCase or CSS name.
    pub fn from_name(name: &str) -> Option<StyleProperty> {
        StyleProperty::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name || p.css_name() == name)
    }

    /// Human-readable label: `"minWidth"` becomes `"Min Width"`.
    pub fn label(self) -> String {
        let mut label = String::new();
        for (i, ch) in self.name().chars().enumerate() {
            if i == 0 {
                label.extend(ch.to_uppercase());
            } else if ch.is_ascii_uppercase() {
                label.push(' ');
                label.push(ch);
            } else {
                label.push(ch);
            }
        }
        label
    }

    /// Keyword values a keyword control offers for this property.
    ///
    /// Empty for properties that are edited as free-form values only.
    pub fn keywords(self) -> &'static [&'static str] {
        use StyleProperty::*;
        match self {
            Width | Height | MinWidth | MinHeight => {
                &["auto", "fit-content", "min-content", "max-content"]
            }
            MaxWidth | MaxHeight => &["none", "fit-content", "min-content", "max-content"],
            OverflowX | OverflowY => &["visible", "hidden", "clip", "scroll", "auto"],
            ObjectFit => &["fill", "contain", "cover", "none", "scale-down"],
            AspectRatio => &["auto"],
            FontWeight => &["normal", "bold", "lighter", "bolder"],
            FontSize => &[
                "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large",
                "smaller", "larger",
            ],
            LineHeight | LetterSpacing => &["normal"],
            Color => &["currentcolor", "transparent"],
            TextAlign => &["start", "end", "left", "right", "center", "justify", "match-parent"],
            FontStyle => &["normal", "italic", "oblique"],
            TextDecorationLine => &["none", "underline", "overline", "line-through"],
            TextTransform => &["none", "capitalize", "uppercase", "lowercase", "full-width"],
            Direction => &["ltr", "rtl"],
            WhiteSpaceCollapse => &[
                "collapse",
                "preserve",
                "preserve-breaks",
                "preserve-spaces",
                "break-spaces",
            ],
            TextWrapMode => &["wrap", "nowrap"],
            TextWrapStyle => &["auto", "balance", "stable", "pretty"],
            TextOverflow => &["clip", "ellipsis"],
            Hyphens => &["none", "manual", "auto"],
            ObjectPosition | FontFamily | OutlineOffset => &[],
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleProperty {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::from_name(s).ok_or_else(|| UnknownProperty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for &p in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_name(p.name()), Some(p));
            assert_eq!(StyleProperty::from_name(p.css_name()), Some(p));
        }
    }

    #[test]
    fn css_names_are_kebab_case() {
        assert_eq!(StyleProperty::OverflowX.css_name(), "overflow-x");
        assert_eq!(StyleProperty::WhiteSpaceCollapse.css_name(), "white-space-collapse");
        assert_eq!(StyleProperty::OutlineOffset.css_name(), "outline-offset");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "fontVariant".parse::<StyleProperty>().unwrap_err();
        assert_eq!(err, UnknownProperty("fontVariant".into()));
        assert_eq!(err.to_string(), "unknown style property: fontVariant");
    }

    #[test]
    fn labels_are_humanized() {
        assert_eq!(StyleProperty::Width.label(), "Width");
        assert_eq!(StyleProperty::MinWidth.label(), "Min Width");
        assert_eq!(StyleProperty::OverflowX.label(), "Overflow X");
        assert_eq!(StyleProperty::TextDecorationLine.label(), "Text Decoration Line");
    }

    #[test]
    fn overflow_keywords() {
        assert!(StyleProperty::OverflowY.keywords().contains(&"hidden"));
        assert!(StyleProperty::OutlineOffset.keywords().is_empty());
    }

    #[test]
    fn display_uses_camel_case_name() {
        assert_eq!(StyleProperty::FontSize.to_string(), "fontSize");
    }
}
