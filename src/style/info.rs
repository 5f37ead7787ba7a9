//! `StyleInfo`: the read-only style snapshot of the selected element.

use std::collections::BTreeMap;

use crate::style::property::StyleProperty;
use crate::style::source::StyleSource;
use crate::style::value::StyleValue;

/// A resolved value together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub value: StyleValue,
    pub source: StyleSource,
}

/// Snapshot of every property that has an explicit entry.
///
/// A property without an entry uses the engine default. Snapshots are shared
/// behind `Rc` once published and replaced wholesale after each commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleInfo {
    entries: BTreeMap<StyleProperty, StyleEntry>,
}

impl StyleInfo {
    /// An empty snapshot: every property is default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry (builder).
    pub fn with(mut self, property: StyleProperty, value: StyleValue, source: StyleSource) -> Self {
        self.insert(property, value, source);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, property: StyleProperty, value: StyleValue, source: StyleSource) {
        self.entries.insert(property, StyleEntry { value, source });
    }

    /// Remove an entry, returning it.
    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleEntry> {
        self.entries.remove(&property)
    }

    /// The entry for `property`, if any.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleEntry> {
        self.entries.get(&property)
    }

    /// The value for `property`, if any.
    pub fn value(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.get(property).map(|entry| &entry.value)
    }

    /// The provenance for `property`; `Default` when absent.
    pub fn source(&self, property: StyleProperty) -> StyleSource {
        self.get(property)
            .map(|entry| entry.source)
            .unwrap_or_default()
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.entries.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in property order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleEntry)> {
        self.entries.iter().map(|(p, e)| (*p, e))
    }
}

impl FromIterator<(StyleProperty, StyleEntry)> for StyleInfo {
    fn from_iter<T: IntoIterator<Item = (StyleProperty, StyleEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
