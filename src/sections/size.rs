//! Size section: dimensions, overflow, object fit and position.
//!
//! The overflow toggle edits `overflowX` and `overflowY` together; every
//! selection or reset is one commit covering both axes.

use crate::controls::{ResetButton, TextControl, ToggleGroup, ToggleItem};
use crate::sections::Section;
use crate::style::{StyleInfo, StyleProperty, StyleSource};
use crate::update::StyleEngine;

use StyleProperty::*;

pub const PROPERTIES: &[StyleProperty] = &[
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    OverflowX,
    OverflowY,
    ObjectFit,
    ObjectPosition,
    AspectRatio,
];

pub const SECTION: Section = Section::new("Size", PROPERTIES);

/// Dimension inputs, in panel order.
pub const DIMENSIONS: &[StyleProperty] =
    &[Width, Height, MinWidth, MinHeight, MaxWidth, MaxHeight, AspectRatio];

/// The linked overflow axes.
pub const OVERFLOW: &[StyleProperty] = &[OverflowX, OverflowY];

const OVERFLOW_ITEMS: [ToggleItem; 4] = [
    ToggleItem::new(
        "visible",
        "Overflow",
        "Content is fully visible and extends beyond the container if it exceeds its size.",
    ),
    ToggleItem::new(
        "hidden",
        "Overflow",
        "Content that exceeds the container's size is clipped and hidden without scrollbars.",
    ),
    ToggleItem::new(
        "scroll",
        "Overflow",
        "Scrollbars are added to the container, allowing users to scroll and view the exceeding content.",
    ),
    ToggleItem::new(
        "auto",
        "Overflow",
        "Scrollbars are added to the container only when necessary, based on the content size.",
    ),
];

/// Input for one dimension property.
pub fn dimension_control(property: StyleProperty) -> TextControl {
    TextControl::new(property)
}

/// The overflow toggle, bound to both axes.
pub fn overflow_toggle() -> ToggleGroup {
    ToggleGroup::new(OVERFLOW, OVERFLOW_ITEMS.to_vec())
}

/// Set both overflow axes to `value` in one commit.
pub fn set_overflow(engine: &dyn StyleEngine, value: &str) {
    overflow_toggle().select(engine, value);
}

/// Delete both overflow axes in one commit.
pub fn clear_overflow(engine: &dyn StyleEngine) {
    overflow_toggle().reset(engine);
}

/// Provenance shown on the overflow label.
pub fn overflow_source(style: &StyleInfo) -> StyleSource {
    overflow_toggle().source(style)
}

/// Object-fit keyword input.
pub fn object_fit_control() -> TextControl {
    TextControl::new(ObjectFit)
}

/// Button that opens the object-position editor; alt-click clears it.
pub fn object_position_button() -> ResetButton {
    ResetButton::new([ObjectPosition])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ClickOutcome;
    use crate::event::{Modifiers, PointerEvent};
    use crate::style::StyleValue;
    use crate::testing::RecordingEngine;
    use crate::update::StyleUpdate;
    use pretty_assertions::assert_eq;

    #[test]
    fn overflow_hidden_sets_both_axes_in_one_commit() {
        let engine = RecordingEngine::new();
        set_overflow(&engine, "hidden");
        assert_eq!(
            engine.commits(),
            vec![vec![
                StyleUpdate::Set { property: OverflowX, value: StyleValue::keyword("hidden") },
                StyleUpdate::Set { property: OverflowY, value: StyleValue::keyword("hidden") },
            ]]
        );
    }

    #[test]
    fn clear_overflow_deletes_both_axes() {
        let engine = RecordingEngine::new();
        set_overflow(&engine, "scroll");
        clear_overflow(&engine);
        assert_eq!(engine.commit_count(), 2);
        let style = engine.current_style();
        assert!(!style.contains(OverflowX));
        assert!(!style.contains(OverflowY));
    }

    #[test]
    fn overflow_source_takes_highest_axis() {
        let style = StyleInfo::new()
            .with(OverflowX, StyleValue::keyword("auto"), StyleSource::Preset)
            .with(OverflowY, StyleValue::keyword("hidden"), StyleSource::Local);
        assert_eq!(overflow_source(&style), StyleSource::Local);
        assert_eq!(overflow_toggle().value(&style).as_deref(), Some("auto"));
    }

    #[test]
    fn overflow_items_cover_toggle_values() {
        let values: Vec<_> = overflow_toggle().items().iter().map(|i| i.value).collect();
        assert_eq!(values, vec!["visible", "hidden", "scroll", "auto"]);
    }

    #[test]
    fn object_position_alt_click_clears() {
        let engine = RecordingEngine::new();
        let outcome =
            object_position_button().click(PointerEvent::click(Modifiers::ALT), &engine);
        assert_eq!(outcome, ClickOutcome::Reset);
        assert_eq!(
            engine.commits(),
            vec![vec![StyleUpdate::Delete { property: ObjectPosition }]]
        );
    }

    #[test]
    fn dimension_input_writes_single_property() {
        let engine = RecordingEngine::new();
        let style = engine.current_style();
        dimension_control(MaxWidth).commit(&style, &engine, "none").unwrap();
        assert_eq!(
            engine.current_style().value(MaxWidth),
            Some(&StyleValue::keyword("none"))
        );
        assert_eq!(object_fit_control().property(), ObjectFit);
    }

    #[test]
    fn section_covers_every_dimension() {
        for property in DIMENSIONS.iter().chain(OVERFLOW) {
            assert!(PROPERTIES.contains(property));
        }
        assert_eq!(SECTION.label, "Size");
    }
}
