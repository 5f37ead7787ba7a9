//! Input events consumed by panel controls.

pub mod input;

pub use input::{Modifiers, PointerButton, PointerEvent};
