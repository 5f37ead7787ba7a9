//! TextControl: a free-form value input for one property.

use crate::css::{parse_value, ParseError};
use crate::style::{StyleInfo, StyleProperty, StyleValue};
use crate::update::{PropertyBinding, StyleEngine};

/// Text input that parses what the user typed and writes it through a
/// [`PropertyBinding`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextControl {
    property: StyleProperty,
    default: StyleValue,
}

impl TextControl {
    /// Input for `property`, showing `unset` when it has no value.
    pub fn new(property: StyleProperty) -> Self {
        Self {
            property,
            default: StyleValue::Unset,
        }
    }

    /// Replace the value shown when the property has no entry (builder).
    pub fn with_default(mut self, default: StyleValue) -> Self {
        self.default = default;
        self
    }

    pub fn property(&self) -> StyleProperty {
        self.property
    }

    /// Binding for one interaction.
    pub fn binding<'a>(&self, style: &'a StyleInfo, engine: &'a dyn StyleEngine) -> PropertyBinding<'a> {
        PropertyBinding::new(self.property, style, engine).with_default(self.default.clone())
    }

    /// Text shown in the input.
    pub fn display(&self, style: &StyleInfo, engine: &dyn StyleEngine) -> String {
        self.binding(style, engine).read().to_string()
    }

    /// Keyword suggestions offered next to the input.
    pub fn keywords(&self) -> Vec<StyleValue> {
        self.property
            .keywords()
            .iter()
            .map(|keyword| StyleValue::keyword(*keyword))
            .collect()
    }

    /// Commit typed text: blank input clears the property, anything else is
    /// parsed and written. Nothing is written when parsing fails.
    pub fn commit(
        &self,
        style: &StyleInfo,
        engine: &dyn StyleEngine,
        input: &str,
    ) -> Result<(), ParseError> {
        let binding = self.binding(style, engine);
        if input.trim().is_empty() {
            binding.clear();
            return Ok(());
        }
        binding.write(parse_value(self.property, input)?);
        Ok(())
    }
}
