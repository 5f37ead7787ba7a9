//! Undo/redo history of committed batches.
//!
//! One entry per commit, so undoing a linked-axes change reverts both axes.

use crate::store::instance::InstanceId;
use crate::update::StyleUpdate;

/// A committed batch and the operations that revert it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Commit {
    pub instance: InstanceId,
    pub forward: Vec<StyleUpdate>,
    pub inverse: Vec<StyleUpdate>,
}

/// Linear history with a cursor; pushing after an undo drops the redo tail.
#[derive(Debug)]
pub(crate) struct History {
    commits: Vec<Commit>,
    /// Number of commits currently applied.
    index: usize,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            commits: Vec::new(),
            index: 0,
            limit,
        }
    }

    pub fn push(&mut self, commit: Commit) {
        self.commits.truncate(self.index);
        if self.limit == 0 {
            self.index = 0;
            return;
        }
        self.commits.push(commit);
        if self.commits.len() > self.limit {
            self.commits.remove(0);
        }
        self.index = self.commits.len();
    }

    pub fn undo(&mut self) -> Option<Commit> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.commits[self.index].clone())
        } else {
            None
        }
    }

    pub fn redo(&mut self) -> Option<Commit> {
        if self.index < self.commits.len() {
            let commit = self.commits[self.index].clone();
            self.index += 1;
            Some(commit)
        } else {
            None
        }
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.commits.len()
    }
}
