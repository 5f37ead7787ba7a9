//! RecordingEngine: a minimal style engine that records every commit.
//!
//! Useful for asserting exactly which operations a control or section sent
//! and how many commits a single interaction produced.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::style::{StyleInfo, StyleSource};
use crate::update::{EngineError, StyleEngine, StyleUpdate};

/// A [`StyleEngine`] that applies every write as a local override and keeps
/// the raw operation lists it received.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    style: RefCell<Rc<StyleInfo>>,
    commits: RefCell<Vec<Vec<StyleUpdate>>>,
    rejecting: Cell<bool>,
}

impl RecordingEngine {
    /// Start with an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given snapshot.
    pub fn with_style(style: StyleInfo) -> Self {
        Self {
            style: RefCell::new(Rc::new(style)),
            ..Self::default()
        }
    }

    /// When `true`, every subsequent batch is refused without effect.
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.set(rejecting);
    }

    /// All accepted commits, oldest first.
    pub fn commits(&self) -> Vec<Vec<StyleUpdate>> {
        self.commits.borrow().clone()
    }

    /// Number of accepted commits.
    pub fn commit_count(&self) -> usize {
        self.commits.borrow().len()
    }
}

impl StyleEngine for RecordingEngine {
    fn current_style(&self) -> Rc<StyleInfo> {
        Rc::clone(&self.style.borrow())
    }

    fn apply_updates(&self, updates: &[StyleUpdate]) -> Result<(), EngineError> {
        if self.rejecting.get() {
            let property = updates
                .first()
                .map(StyleUpdate::property)
                .ok_or(EngineError::NoSelection)?;
            return Err(EngineError::InvalidValue {
                property,
                value: "rejected".into(),
            });
        }

        let mut next = StyleInfo::clone(&self.style.borrow());
        for update in updates {
            match update {
                StyleUpdate::Set { property, value } => {
                    next.insert(*property, value.clone(), StyleSource::Local)
                }
                StyleUpdate::Delete { property } => {
                    next.remove(*property);
                }
            }
        }
        *self.style.borrow_mut() = Rc::new(next);
        self.commits.borrow_mut().push(updates.to_vec());
        Ok(())
    }
}
