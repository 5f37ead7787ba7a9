//! Provenance of a property value and the aggregate resolver.

use std::fmt;

use crate::style::info::StyleInfo;
use crate::style::property::StyleProperty;

/// Where a property's current value comes from.
///
/// The derived ordering is the precedence order used when several
/// properties share one affordance: `Local > Remote > Preset > Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StyleSource {
    /// No explicit entry; the engine default or inherited value applies.
    #[default]
    Default,
    /// Declared by the component's preset styles.
    Preset,
    /// Declared by a shared, reusable token.
    Remote,
    /// Overridden on this instance.
    Local,
}

impl StyleSource {
    /// Affordance variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleSource::Default => "default",
            StyleSource::Preset => "preset",
            StyleSource::Remote => "remote",
            StyleSource::Local => "local",
        }
    }
}

impl fmt::Display for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve one aggregate source for a group of properties.
///
/// A property missing from `style` counts as [`StyleSource::Default`]. The
/// highest-precedence source among the members wins, so the result does not
/// depend on iteration order. An empty group resolves to `Default`.
pub fn resolve_style_source<I>(properties: I, style: &StyleInfo) -> StyleSource
where
    I: IntoIterator<Item = StyleProperty>,
{
    properties
        .into_iter()
        .map(|property| style.source(property))
        .max()
        .unwrap_or_default()
}
