//! Style data model: properties, values, snapshots and provenance.

pub mod info;
pub mod property;
pub mod source;
pub mod value;

pub use info::{StyleEntry, StyleInfo};
pub use property::{StyleProperty, UnknownProperty};
pub use source::{resolve_style_source, StyleSource};
pub use value::{StyleValue, Unit};
