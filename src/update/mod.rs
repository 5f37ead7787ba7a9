//! The write path: operations, the style-engine contract, bindings and batches.
//!
//! - [`StyleEngine`]: the collaborator that owns the current snapshot and
//!   applies ordered operations atomically.
//! - [`PropertyBinding`]: single-property read/write adapter for one control.
//! - [`BatchUpdate`]: buffered multi-property session published as one commit.

use std::rc::Rc;

use crate::style::{StyleInfo, StyleProperty, StyleValue};

pub mod batch;
pub mod binding;

pub use batch::BatchUpdate;
pub use binding::PropertyBinding;

/// One pending write.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Set {
        property: StyleProperty,
        value: StyleValue,
    },
    Delete {
        property: StyleProperty,
    },
}

impl StyleUpdate {
    /// The property this operation targets.
    pub fn property(&self) -> StyleProperty {
        match self {
            StyleUpdate::Set { property, .. } | StyleUpdate::Delete { property } => *property,
        }
    }
}

/// Errors reported by a style engine when it refuses a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("no instance is selected")]
    NoSelection,
    #[error("invalid value for {property}: {value}")]
    InvalidValue {
        property: StyleProperty,
        value: String,
    },
    #[error("unknown instance")]
    UnknownInstance,
    #[error("unknown token")]
    UnknownToken,
}

/// The style-computation collaborator the panels read from and write to.
///
/// Implementations are single-threaded and use interior mutability, so
/// controls can hold a shared reference for the duration of an event handler.
pub trait StyleEngine {
    /// The current snapshot. Pure read.
    fn current_style(&self) -> Rc<StyleInfo>;

    /// Apply `updates` in order as one indivisible change.
    ///
    /// Either every operation takes effect and a new snapshot becomes
    /// current, or the engine returns an error and nothing changes.
    fn apply_updates(&self, updates: &[StyleUpdate]) -> Result<(), EngineError>;

    /// Open a new batch session against this engine.
    fn batch(&self) -> BatchUpdate<'_>
    where
        Self: Sized,
    {
        BatchUpdate::open(self)
    }
}

impl<E: StyleEngine + ?Sized> StyleEngine for Rc<E> {
    fn current_style(&self) -> Rc<StyleInfo> {
        (**self).current_style()
    }

    fn apply_updates(&self, updates: &[StyleUpdate]) -> Result<(), EngineError> {
        (**self).apply_updates(updates)
    }
}
