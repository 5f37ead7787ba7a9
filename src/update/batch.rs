//! BatchUpdate: a buffered, atomically published group of writes.
//!
//! Several affordances change more than one property per user action (both
//! overflow axes, a whole group of typography options). The session buffers
//! operations and hands them to the engine in a single `apply_updates` call,
//! so undo history and live preview never see a half-applied action.
//!
//! ```
//! use style_panel::style::{StyleProperty, StyleValue};
//! use style_panel::testing::RecordingEngine;
//! use style_panel::update::StyleEngine;
//!
//! let engine = RecordingEngine::new();
//! let mut batch = engine.batch();
//! batch
//!     .set_property(StyleProperty::OverflowX, StyleValue::keyword("hidden"))
//!     .set_property(StyleProperty::OverflowY, StyleValue::keyword("hidden"));
//! batch.publish().unwrap();
//! assert_eq!(engine.commit_count(), 1);
//! ```
//!
//! `publish` consumes the session, so publishing twice does not compile:
//!
//! ```compile_fail
//! use style_panel::testing::RecordingEngine;
//! use style_panel::update::StyleEngine;
//!
//! let engine = RecordingEngine::new();
//! let batch = engine.batch();
//! batch.publish().unwrap();
//! batch.publish().unwrap();
//! ```

use std::fmt;

use crate::style::{StyleProperty, StyleValue};
use crate::update::{EngineError, StyleEngine, StyleUpdate};

/// A pending multi-property write session.
///
/// Dropping the session without calling [`publish`](Self::publish) discards
/// every buffered operation and leaves the engine untouched.
pub struct BatchUpdate<'e> {
    engine: &'e dyn StyleEngine,
    operations: Vec<StyleUpdate>,
}

impl<'e> BatchUpdate<'e> {
    /// Begin an empty session tied to `engine`.
    pub fn open(engine: &'e dyn StyleEngine) -> Self {
        Self {
            engine,
            operations: Vec::new(),
        }
    }

    /// Queue `property = value`.
    pub fn set_property(&mut self, property: StyleProperty, value: StyleValue) -> &mut Self {
        self.push(StyleUpdate::Set { property, value });
        self
    }

    /// Queue removal of `property`.
    pub fn delete_property(&mut self, property: StyleProperty) -> &mut Self {
        self.push(StyleUpdate::Delete { property });
        self
    }

    /// A later operation on the same property replaces the earlier one and
    /// takes its place at the end of the sequence.
    fn push(&mut self, update: StyleUpdate) {
        let property = update.property();
        self.operations.retain(|op| op.property() != property);
        self.operations.push(update);
    }

    /// The buffered operations, in application order.
    pub fn operations(&self) -> &[StyleUpdate] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Hand every buffered operation to the engine as one commit.
    ///
    /// An empty session publishes nothing and does not call the engine.
    pub fn publish(mut self) -> Result<(), EngineError> {
        let operations = std::mem::take(&mut self.operations);
        if operations.is_empty() {
            return Ok(());
        }
        tracing::debug!(operations = operations.len(), "publishing style batch");
        self.engine.apply_updates(&operations)
    }
}

impl Drop for BatchUpdate<'_> {
    fn drop(&mut self) {
        if !self.operations.is_empty() {
            tracing::trace!(
                discarded = self.operations.len(),
                "style batch dropped without publishing"
            );
        }
    }
}

impl fmt::Debug for BatchUpdate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchUpdate")
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleInfo, StyleSource};
    use crate::testing::RecordingEngine;
    use pretty_assertions::assert_eq;
    use StyleProperty::*;

    #[test]
    fn operations_are_invisible_until_publish() {
        let engine = RecordingEngine::new();
        let mut batch = engine.batch();
        batch.set_property(Width, StyleValue::px(10.0));
        assert_eq!(engine.current_style().value(Width), None);
        assert_eq!(engine.commit_count(), 0);

        batch.publish().unwrap();
        assert_eq!(engine.current_style().value(Width), Some(&StyleValue::px(10.0)));
        assert_eq!(engine.commit_count(), 1);
    }

    #[test]
    fn set_and_delete_apply_together() {
        let engine = RecordingEngine::with_style(StyleInfo::new().with(
            Height,
            StyleValue::px(5.0),
            StyleSource::Local,
        ));
        let mut batch = engine.batch();
        batch
            .set_property(Width, StyleValue::px(1.0))
            .delete_property(Height);
        batch.publish().unwrap();

        let style = engine.current_style();
        assert_eq!(style.value(Width), Some(&StyleValue::px(1.0)));
        assert!(!style.contains(Height));
        assert_eq!(
            engine.commits(),
            vec![vec![
                StyleUpdate::Set { property: Width, value: StyleValue::px(1.0) },
                StyleUpdate::Delete { property: Height },
            ]]
        );
    }

    #[test]
    fn last_write_wins_within_session() {
        let engine = RecordingEngine::new();
        let mut batch = engine.batch();
        batch
            .set_property(Width, StyleValue::px(1.0))
            .set_property(Height, StyleValue::px(3.0))
            .set_property(Width, StyleValue::px(2.0));
        assert_eq!(
            batch.operations(),
            &[
                StyleUpdate::Set { property: Height, value: StyleValue::px(3.0) },
                StyleUpdate::Set { property: Width, value: StyleValue::px(2.0) },
            ]
        );
        batch.publish().unwrap();
        assert_eq!(engine.current_style().value(Width), Some(&StyleValue::px(2.0)));
    }

    #[test]
    fn delete_supersedes_earlier_set() {
        let engine = RecordingEngine::new();
        let mut batch = engine.batch();
        batch.set_property(Color, StyleValue::keyword("red")).delete_property(Color);
        assert_eq!(batch.operations(), &[StyleUpdate::Delete { property: Color }]);
    }

    #[test]
    fn dropping_discards_session() {
        let engine = RecordingEngine::new();
        {
            let mut batch = engine.batch();
            batch.set_property(Width, StyleValue::px(10.0));
        }
        assert_eq!(engine.commit_count(), 0);
        assert!(engine.current_style().is_empty());
    }

    #[test]
    fn empty_publish_does_not_commit() {
        let engine = RecordingEngine::new();
        let batch = engine.batch();
        assert!(batch.is_empty());
        batch.publish().unwrap();
        assert_eq!(engine.commit_count(), 0);
    }

    #[test]
    fn rejection_is_returned() {
        let engine = RecordingEngine::new();
        engine.set_rejecting(true);
        let mut batch = BatchUpdate::open(&engine);
        batch.set_property(Width, StyleValue::px(1.0));
        assert!(matches!(
            batch.publish(),
            Err(EngineError::InvalidValue { property: Width, .. })
        ));
        assert!(engine.current_style().is_empty());
    }

    #[test]
    fn debug_lists_operations() {
        let engine = RecordingEngine::new();
        let mut batch = engine.batch();
        batch.delete_property(Width);
        let dbg = format!("{batch:?}");
        assert!(dbg.contains("BatchUpdate"));
        assert!(dbg.contains("Delete"));
    }
}
