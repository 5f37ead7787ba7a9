//! Outline section: outline offset.

use crate::controls::TextControl;
use crate::sections::Section;
use crate::style::{StyleInfo, StyleProperty, StyleValue, Unit};
use crate::update::{PropertyBinding, StyleEngine};

pub const PROPERTIES: &[StyleProperty] = &[StyleProperty::OutlineOffset];

pub const SECTION: Section = Section::new("Outline", PROPERTIES);

/// Shown when the element has no outline-offset entry.
pub const DEFAULT_OUTLINE_OFFSET: StyleValue = StyleValue::Unit {
    value: 0.0,
    unit: Unit::Number,
};

/// Binding for the outline-offset input.
pub fn outline_offset<'a>(style: &'a StyleInfo, engine: &'a dyn StyleEngine) -> PropertyBinding<'a> {
    PropertyBinding::new(StyleProperty::OutlineOffset, style, engine)
        .with_default(DEFAULT_OUTLINE_OFFSET)
}

/// The outline-offset input control.
pub fn outline_offset_control() -> TextControl {
    TextControl::new(StyleProperty::OutlineOffset).with_default(DEFAULT_OUTLINE_OFFSET)
}

/// Keyword items offered next to the input.
pub fn keyword_items() -> Vec<StyleValue> {
    outline_offset_control().keywords()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSource;
    use crate::testing::RecordingEngine;
    use crate::update::StyleUpdate;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_entry_reads_zero_number() {
        let engine = RecordingEngine::new();
        let style = StyleInfo::new();
        assert_eq!(
            outline_offset(&style, &engine).read(),
            StyleValue::Unit { value: 0.0, unit: Unit::Number }
        );
        assert_eq!(outline_offset_control().display(&style, &engine), "0");
    }

    #[test]
    fn present_entry_wins() {
        let engine = RecordingEngine::new();
        let style = StyleInfo::new().with(
            StyleProperty::OutlineOffset,
            StyleValue::px(2.0),
            StyleSource::Local,
        );
        assert_eq!(outline_offset(&style, &engine).read(), StyleValue::px(2.0));
        assert!(SECTION.has_overrides(&style));
    }

    #[test]
    fn typed_value_is_written() {
        let engine = RecordingEngine::new();
        let style = engine.current_style();
        outline_offset_control().commit(&style, &engine, "4px").unwrap();
        assert_eq!(
            engine.commits(),
            vec![vec![StyleUpdate::Set {
                property: StyleProperty::OutlineOffset,
                value: StyleValue::px(4.0),
            }]]
        );
    }

    #[test]
    fn no_keyword_items() {
        assert!(keyword_items().is_empty());
    }
}
