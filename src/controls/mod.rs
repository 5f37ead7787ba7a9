//! Panel controls wired to the update model.
//!
//! - [`ToggleGroup`]: keyword buttons over one or several linked properties.
//! - [`TextControl`]: free-form value input.
//! - [`ResetButton`]: group affordance with alt-click reset.

pub mod reset;
pub mod text;
pub mod toggle;

pub use reset::{ClickOutcome, ResetButton};
pub use text::TextControl;
pub use toggle::{ToggleGroup, ToggleItem};
