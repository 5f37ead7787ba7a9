//! Panel sections: labelled groups of properties with a collapsed summary.
//!
//! - [`size`]: dimensions, linked overflow axes, object fit/position.
//! - [`typography`]: font and text properties, advanced-options group.
//! - [`outline`]: outline offset with its zero default.

use std::fmt;

use crate::style::{resolve_style_source, StyleInfo, StyleProperty, StyleSource};

pub mod outline;
pub mod size;
pub mod typography;

/// A labelled group of properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub properties: &'static [StyleProperty],
}

impl Section {
    pub const fn new(label: &'static str, properties: &'static [StyleProperty]) -> Self {
        Self { label, properties }
    }

    /// `true` iff any property of the section has a non-default source.
    pub fn has_overrides(&self, style: &StyleInfo) -> bool {
        self.source(style) != StyleSource::Default
    }

    /// Aggregate source over the section's properties.
    pub fn source(&self, style: &StyleInfo) -> StyleSource {
        resolve_style_source(self.properties.iter().copied(), style)
    }

    /// Collapsed-state summary: which properties carry a value and from where.
    pub fn summary(&self, style: &StyleInfo) -> SectionSummary {
        SectionSummary {
            label: self.label,
            source: self.source(style),
            overridden: self
                .properties
                .iter()
                .copied()
                .filter(|p| style.source(*p) != StyleSource::Default)
                .collect(),
        }
    }
}

/// What a collapsed section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub label: &'static str,
    pub source: StyleSource,
    /// Properties with an entry, in section order.
    pub overridden: Vec<StyleProperty>,
}

impl SectionSummary {
    pub fn has_overrides(&self) -> bool {
        !self.overridden.is_empty()
    }
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)?;
        if self.overridden.is_empty() {
            return Ok(());
        }
        write!(f, " ({}): ", self.source)?;
        for (i, property) in self.overridden.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{property}")?;
        }
        Ok(())
    }
}
