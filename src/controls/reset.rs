//! ResetButton: an affordance that opens a panel, or resets its properties on alt-click.

use crate::event::PointerEvent;
use crate::style::{resolve_style_source, StyleInfo, StyleProperty, StyleSource};
use crate::update::{BatchUpdate, StyleEngine};

/// What the caller should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The properties were reset; keep the panel closed.
    Reset,
    /// Open the associated panel.
    Open,
}

/// Button coloured by the aggregate source of a property group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetButton {
    properties: Vec<StyleProperty>,
}

impl ResetButton {
    pub fn new(properties: impl Into<Vec<StyleProperty>>) -> Self {
        Self {
            properties: properties.into(),
        }
    }

    pub fn properties(&self) -> &[StyleProperty] {
        &self.properties
    }

    /// Aggregate provenance of the group, used for the button variant.
    pub fn source(&self, style: &StyleInfo) -> StyleSource {
        resolve_style_source(self.properties.iter().copied(), style)
    }

    /// Delete the whole group in one commit.
    pub fn reset(&self, engine: &dyn StyleEngine) {
        let mut batch = BatchUpdate::open(engine);
        for &property in &self.properties {
            batch.delete_property(property);
        }
        if let Err(error) = batch.publish() {
            tracing::debug!(%error, properties = self.properties.len(), "group reset rejected");
        }
    }

    /// Alt-click resets the group; any other click asks for the panel.
    pub fn click(&self, event: PointerEvent, engine: &dyn StyleEngine) -> ClickOutcome {
        if event.is_alt_click() {
            self.reset(engine);
            ClickOutcome::Reset
        } else {
            ClickOutcome::Open
        }
    }
}
