//! Last-in-first-out stack of booking actions.

use crate::reservation::UndoAction;

/// Stack of reversible booking actions, most recent on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoLedger {
    actions: Vec<UndoAction>,
}

impl UndoLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an action.
    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Pops the most recent action.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    /// Returns the number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
