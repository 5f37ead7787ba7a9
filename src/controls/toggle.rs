//! ToggleGroup: a row of keyword buttons bound to one or more properties.
//!
//! With several properties (overflow-x + overflow-y) every selection writes
//! all of them in one batch.

use crate::style::{resolve_style_source, StyleInfo, StyleProperty, StyleSource, StyleValue};
use crate::update::{BatchUpdate, StyleEngine};

/// One button of a toggle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleItem {
    pub value: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl ToggleItem {
    pub const fn new(value: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            value,
            title,
            description,
        }
    }
}

/// Keyword buttons writing the same keyword to every bound property.
///
/// The first property is the one whose value the group displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleGroup {
    properties: Vec<StyleProperty>,
    items: Vec<ToggleItem>,
}

impl ToggleGroup {
    /// Create a group. `properties` must not be empty.
    pub fn new(properties: impl Into<Vec<StyleProperty>>, items: Vec<ToggleItem>) -> Self {
        let properties = properties.into();
        debug_assert!(!properties.is_empty(), "toggle group needs a property");
        Self { properties, items }
    }

    pub fn properties(&self) -> &[StyleProperty] {
        &self.properties
    }

    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    /// Displayed value: the first property's value as CSS text.
    pub fn value(&self, style: &StyleInfo) -> Option<String> {
        self.properties
            .first()
            .and_then(|property| style.value(*property))
            .map(StyleValue::to_string)
    }

    /// The item matching the displayed value.
    pub fn selected_item(&self, style: &StyleInfo) -> Option<&ToggleItem> {
        let value = self.value(style)?;
        self.items.iter().find(|item| item.value == value)
    }

    /// Aggregate provenance over every bound property.
    pub fn source(&self, style: &StyleInfo) -> StyleSource {
        resolve_style_source(self.properties.iter().copied(), style)
    }

    /// Write `value` to every bound property in one commit.
    pub fn select(&self, engine: &dyn StyleEngine, value: &str) {
        let mut batch = BatchUpdate::open(engine);
        for &property in &self.properties {
            batch.set_property(property, StyleValue::keyword(value));
        }
        if let Err(error) = batch.publish() {
            tracing::debug!(%error, value, "toggle selection rejected");
        }
    }

    /// Delete every bound property in one commit.
    pub fn reset(&self, engine: &dyn StyleEngine) {
        let mut batch = BatchUpdate::open(engine);
        for &property in &self.properties {
            batch.delete_property(property);
        }
        if let Err(error) = batch.publish() {
            tracing::debug!(%error, "toggle reset rejected");
        }
    }

    /// The declarations selecting `item` would produce, one per line.
    pub fn preview(&self, item: &ToggleItem) -> String {
        self.properties
            .iter()
            .map(|property| format!("{}: {};", property.css_name(), item.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
