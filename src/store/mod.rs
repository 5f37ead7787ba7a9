//! In-memory style engine: instances, tokens, presets, undo/redo, listeners.
//!
//! [`StyleStore`] implements [`StyleEngine`](crate::update::StyleEngine) so
//! bindings, batches and sections can run against it without an external
//! style-computation service.

pub mod config;
pub mod engine;
mod history;
pub mod instance;

pub use config::StoreConfig;
pub use engine::{ListenerId, StyleStore};
pub use instance::{Declarations, InstanceId, Token, TokenId};
