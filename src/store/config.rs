//! Store configuration.

/// Configuration for a [`StyleStore`](super::StyleStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of commits kept for undo. `0` disables history.
    pub history_limit: usize,
    /// Refuse batches containing [`StyleValue::Invalid`](crate::style::StyleValue::Invalid).
    pub reject_invalid: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_limit: 100,
            reject_invalid: true,
        }
    }
}

impl StoreConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the undo history limit (builder).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set whether invalid values are refused (builder).
    pub fn with_reject_invalid(mut self, reject: bool) -> Self {
        self.reject_invalid = reject;
        self
    }
}
