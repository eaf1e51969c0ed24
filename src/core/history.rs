//! Undo/redo history over state identifiers.
//!
//! The history is a pair of stacks: states left behind by forward
//! progress, and states left behind by undo. It knows nothing about the
//! machine or its configuration; it only shuffles identifiers between the
//! stacks and the caller's notion of "current".

use serde::{Deserialize, Serialize};

/// Two-stack undo/redo history.
///
/// `back` holds previously visited states, most recent last. `forward`
/// holds states that were undone, most recent last. Recording forward
/// progress clears `forward`: once a new state is reached, the redo chain
/// is broken.
///
/// Every identifier on either stack was a valid "current" state at the
/// time it was pushed, so popping one back into place is always safe.
///
/// # Example
///
/// ```rust
/// use retrace::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// let mut current = "running".to_string();
///
/// history.record("idle".to_string());
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "idle");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "running");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    back: Vec<String>,
    forward: Vec<String>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record forward progress out of `departed`.
    ///
    /// Pushes the departed state onto the back stack and clears the
    /// forward stack.
    pub fn record(&mut self, departed: String) {
        self.back.push(departed);
        self.forward.clear();
    }

    /// Step back to the most recently departed state.
    ///
    /// On success `current` is pushed onto the forward stack and replaced
    /// by the popped state. Returns `false` without touching anything when
    /// the back stack is empty.
    pub fn undo(&mut self, current: &mut String) -> bool {
        match self.back.pop() {
            Some(previous) => {
                self.forward.push(std::mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Mirror image of [`undo`](Self::undo): on success `current` moves to
    /// the back stack and the popped forward state takes its place.
    pub fn redo(&mut self, current: &mut String) -> bool {
        match self.forward.pop() {
            Some(next) => {
                self.back.push(std::mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.back.clear();
        self.forward.clear();
    }

    /// Whether a subsequent [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        !self.back.is_empty()
    }

    /// Whether a subsequent [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Previously visited states, most recent last.
    pub fn back_states(&self) -> &[String] {
        &self.back
    }

    /// Undone states, most recent last.
    pub fn forward_states(&self) -> &[String] {
        &self.forward
    }
}
