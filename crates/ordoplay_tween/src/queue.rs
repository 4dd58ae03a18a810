// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pending tween targets.

use std::collections::VecDeque;

/// FIFO of snapshots waiting to be animated
///
/// Holds only future targets; the displayed snapshot is never queued.
#[derive(Debug, Clone)]
pub struct TargetQueue<S> {
    targets: VecDeque<S>,
}

impl<S> TargetQueue<S> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            targets: VecDeque::new(),
        }
    }

    /// Add targets behind the ones already pending
    pub fn append(&mut self, targets: impl IntoIterator<Item = S>) {
        self.targets.extend(targets);
    }

    /// Discard every pending target and queue `target` alone
    pub fn replace_all(&mut self, target: S) {
        self.targets.clear();
        self.targets.push_back(target);
    }

    /// Take the next target
    pub fn pop(&mut self) -> Option<S> {
        self.targets.pop_front()
    }

    /// Peek at the next target
    pub fn peek(&self) -> Option<&S> {
        self.targets.front()
    }

    /// Number of pending targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<S> Default for TargetQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for TargetQueue<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
