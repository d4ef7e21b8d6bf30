//! Append-only log of cell writes.

use crate::address::CellAddress;
use crate::cell::CellValue;

/// One cell write. `None` means the cell was empty.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoAction {
    pub sheet: String,
    pub address: CellAddress,
    pub old: Option<CellValue>,
    pub new: Option<CellValue>,
}

/// Undo is single-level per pop with no redo.
#[derive(Debug, Clone)]
pub struct UndoLog {
    actions: Vec<UndoAction>,
    max_actions: usize,
    /// `actions.len()` at the last save; `None` once that point has been trimmed or undone past.
    clean_index: Option<usize>,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl UndoLog {
    pub fn new(max_actions: usize) -> Self {
        Self {
            actions: Vec::new(),
            max_actions: max_actions.max(1),
            clean_index: Some(0),
        }
    }

    /// Record a write. Writes that did not change the value are dropped.
    pub fn push(&mut self, action: UndoAction) {
        if action.old == action.new {
            return;
        }
        if let Some(clean) = self.clean_index
            && clean > self.actions.len()
        {
            self.clean_index = None;
        }
        self.actions.push(action);
        if self.actions.len() > self.max_actions {
            self.actions.remove(0);
            self.clean_index = self.clean_index.and_then(|i| i.checked_sub(1));
        }
    }

    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.clean_index = Some(0);
    }

    /// Whether the log is back at the last saved state.
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.actions.len())
    }

    pub fn mark_clean(&mut self) {
        self.clean_index = Some(self.actions.len());
    }
}
