//! Typography section: font and text properties.
//!
//! Six rarely used properties live behind an "advanced" button. Resetting
//! them goes through a single batch so no listener sees half the group.

use crate::controls::{ResetButton, TextControl, ToggleGroup, ToggleItem};
use crate::sections::Section;
use crate::style::{resolve_style_source, StyleInfo, StyleProperty, StyleSource, StyleValue};
use crate::update::StyleEngine;

use StyleProperty::*;

pub const PROPERTIES: &[StyleProperty] = &[
    FontFamily,
    FontWeight,
    FontSize,
    LineHeight,
    Color,
    TextAlign,
    FontStyle,
    TextDecorationLine,
    LetterSpacing,
    TextTransform,
    Direction,
    WhiteSpaceCollapse,
    TextWrapMode,
    TextWrapStyle,
    TextOverflow,
    Hyphens,
];

pub const SECTION: Section = Section::new("Typography", PROPERTIES);

/// Properties behind the advanced button.
pub const ADVANCED: &[StyleProperty] = &[
    WhiteSpaceCollapse,
    TextWrapMode,
    TextWrapStyle,
    Direction,
    Hyphens,
    TextOverflow,
];

/// Button for the advanced group; alt-click resets it.
pub fn advanced_button() -> ResetButton {
    ResetButton::new(ADVANCED)
}

/// Delete every advanced property in one commit.
pub fn reset_advanced(engine: &dyn StyleEngine) {
    advanced_button().reset(engine);
}

/// Provenance shown on the advanced button.
pub fn advanced_source(style: &StyleInfo) -> StyleSource {
    resolve_style_source(ADVANCED.iter().copied(), style)
}

/// Text alignment in logical form: `left` reads as `start`, `right` as `end`.
pub fn text_align_value(style: &StyleInfo) -> Option<String> {
    let value = style.value(TextAlign)?;
    Some(match value.as_keyword() {
        Some("left") => "start".to_owned(),
        Some("right") => "end".to_owned(),
        _ => value.to_string(),
    })
}

/// The text-align item matching the logical value.
pub fn text_align_item(style: &StyleInfo) -> Option<ToggleItem> {
    let value = text_align_value(style)?;
    text_align().items().iter().find(|item| item.value == value).copied()
}

pub fn text_align() -> ToggleGroup {
    ToggleGroup::new(
        [TextAlign],
        vec![
            ToggleItem::new(
                "start",
                "Text Align",
                "Aligns the text based on the writing direction.",
            ),
            ToggleItem::new(
                "center",
                "Text Align",
                "Centers the text horizontally within its container.",
            ),
            ToggleItem::new(
                "end",
                "Text Align",
                "Aligns the text based on the writing direction.",
            ),
            ToggleItem::new(
                "justify",
                "Text Align",
                "Adjusts word spacing to align text to both the left and right edges of the container",
            ),
        ],
    )
}

pub fn font_style() -> ToggleGroup {
    ToggleGroup::new(
        [FontStyle],
        vec![
            ToggleItem::new(
                "normal",
                "Font Style",
                "The default value. The text appears in a normal, upright style.",
            ),
            ToggleItem::new(
                "italic",
                "Font Style",
                "The text appears in italic style, where it is slanted to the right.",
            ),
        ],
    )
}

pub fn text_decoration() -> ToggleGroup {
    ToggleGroup::new(
        [TextDecorationLine],
        vec![
            ToggleItem::new(
                "none",
                "Text Decoration Line",
                "No decoration is applied to the text.",
            ),
            ToggleItem::new(
                "underline",
                "Text Decoration Line",
                "Adds a horizontal line underneath the text.",
            ),
            ToggleItem::new(
                "line-through",
                "Text Decoration Line",
                "Draws a horizontal line through the middle of the text.",
            ),
        ],
    )
}

pub fn text_transform() -> ToggleGroup {
    ToggleGroup::new(
        [TextTransform],
        vec![
            ToggleItem::new(
                "none",
                "Text Transform",
                "No transformation is applied to the text. The text appears as it is.",
            ),
            ToggleItem::new(
                "uppercase",
                "Text Transform",
                "Transforms the text to appear in all uppercase letters.",
            ),
            ToggleItem::new(
                "capitalize",
                "Text Transform",
                "Transforms the first character of each word to uppercase, while the remaining characters are in lowercase.",
            ),
            ToggleItem::new(
                "lowercase",
                "Text Transform",
                "Transforms the text to appear in all lowercase letters.",
            ),
        ],
    )
}

pub fn direction() -> ToggleGroup {
    ToggleGroup::new(
        [Direction],
        vec![
            ToggleItem::new(
                "ltr",
                "Direction",
                "Sets the text direction to left-to-right, which is the default for most languages.",
            ),
            ToggleItem::new(
                "rtl",
                "Direction",
                "Sets the text direction to right-to-left, typically used for languages such as Arabic or Hebrew.",
            ),
        ],
    )
}

pub fn hyphens() -> ToggleGroup {
    ToggleGroup::new(
        [Hyphens],
        vec![
            ToggleItem::new(
                "manual",
                "Hyphens",
                "Disables hyphenation of words. Words will not be hyphenated even if they exceed the width of their container.",
            ),
            ToggleItem::new(
                "auto",
                "Hyphens",
                "Enables automatic hyphenation of words. The browser will hyphenate long words at appropriate points to fit within the width of their container.",
            ),
        ],
    )
}

pub fn text_overflow() -> ToggleGroup {
    ToggleGroup::new(
        [TextOverflow],
        vec![
            ToggleItem::new(
                "clip",
                "Text Overflow",
                "The overflowing text is clipped and hidden without any indication.",
            ),
            ToggleItem::new(
                "ellipsis",
                "Text Overflow",
                "The overflowing text is truncated with an ellipsis (...) to indicate that there is more content. To make the text-overflow: ellipsis property work, you need to set the following CSS properties: white-space: nowrap; overflow: hidden;",
            ),
        ],
    )
}

/// Free-form inputs of the section.
pub fn font_family_control() -> TextControl {
    TextControl::new(FontFamily)
}

pub fn font_weight_control() -> TextControl {
    TextControl::new(FontWeight).with_default(StyleValue::keyword("normal"))
}

pub fn font_size_control() -> TextControl {
    TextControl::new(FontSize)
}

pub fn line_height_control() -> TextControl {
    TextControl::new(LineHeight).with_default(StyleValue::keyword("normal"))
}

pub fn letter_spacing_control() -> TextControl {
    TextControl::new(LetterSpacing).with_default(StyleValue::keyword("normal"))
}

pub fn color_control() -> TextControl {
    TextControl::new(Color)
}

/// Keyword inputs of the advanced group without a toggle row.
pub fn white_space_control() -> TextControl {
    TextControl::new(WhiteSpaceCollapse)
}

pub fn text_wrap_mode_control() -> TextControl {
    TextControl::new(TextWrapMode)
}

pub fn text_wrap_style_control() -> TextControl {
    TextControl::new(TextWrapStyle)
}
