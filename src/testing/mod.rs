//! Headless testing helpers.
//!
//! Use [`RecordingEngine`] to drive bindings, batches, controls and sections
//! without a full [`StyleStore`](crate::store::StyleStore) and inspect the
//! exact commits they produced.

pub mod recorder;

pub use recorder::RecordingEngine;
