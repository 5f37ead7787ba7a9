//! PropertyBinding: the single-property adapter handed to one control.

use std::fmt;

use crate::style::{resolve_style_source, StyleInfo, StyleProperty, StyleSource, StyleValue};
use crate::update::{StyleEngine, StyleUpdate};

/// Reads one property from a snapshot and writes it straight to the engine.
///
/// The fallback returned by [`read`](Self::read) belongs to the control, not
/// to the engine: an outline-offset input shows `0` when nothing is set, a
/// plain text input shows `unset`.
pub struct PropertyBinding<'a> {
    property: StyleProperty,
    default: StyleValue,
    style: &'a StyleInfo,
    engine: &'a dyn StyleEngine,
}

impl<'a> PropertyBinding<'a> {
    /// Bind `property` with [`StyleValue::Unset`] as the control default.
    pub fn new(property: StyleProperty, style: &'a StyleInfo, engine: &'a dyn StyleEngine) -> Self {
        Self {
            property,
            default: StyleValue::Unset,
            style,
            engine,
        }
    }

    /// Replace the control default (builder).
    pub fn with_default(mut self, default: StyleValue) -> Self {
        self.default = default;
        self
    }

    pub fn property(&self) -> StyleProperty {
        self.property
    }

    /// The snapshot value, or the control default when the property has no entry.
    pub fn read(&self) -> StyleValue {
        self.style
            .value(self.property)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Provenance of the bound property.
    pub fn source(&self) -> StyleSource {
        resolve_style_source([self.property], self.style)
    }

    /// Submit `property = value` as a one-operation commit.
    pub fn write(&self, value: StyleValue) {
        self.submit(StyleUpdate::Set {
            property: self.property,
            value,
        });
    }

    /// Submit removal of the property as a one-operation commit.
    pub fn clear(&self) {
        self.submit(StyleUpdate::Delete {
            property: self.property,
        });
    }

    // Rejected values are the engine's concern; the control simply keeps
    // showing the snapshot it was given.
    fn submit(&self, update: StyleUpdate) {
        if let Err(error) = self.engine.apply_updates(std::slice::from_ref(&update)) {
            tracing::debug!(property = %self.property, %error, "style engine rejected write");
        }
    }
}

impl fmt::Debug for PropertyBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBinding")
            .field("property", &self.property)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
