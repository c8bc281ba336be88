//! Undo journal.
//!
//! Holds at most one pending action. Each push supersedes whatever was
//! pending, and popping is permanent; there is no redo.

use crate::models::UndoAction;

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    pending: Option<UndoAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action, replacing any action still pending.
    pub fn push(&mut self, action: UndoAction) {
        if let Some(superseded) = self.pending.replace(action) {
            tracing::debug!(action = superseded.tag(), "Undo entry superseded");
        }
    }

    /// Take the pending action, leaving the log empty.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.pending.take()
    }

    pub fn last(&self) -> Option<&UndoAction> {
        self.pending.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_empty() {
        let mut log = ActionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn test_push_supersedes_pending() {
        let mut log = ActionLog::new();
        log.push(UndoAction::Register { patient_id: 1001 });
        log.push(UndoAction::Book { token_id: 1 });

        assert_eq!(log.last(), Some(&UndoAction::Book { token_id: 1 }));
        assert_eq!(log.pop(), Some(UndoAction::Book { token_id: 1 }));
        assert_eq!(log.pop(), None);
        assert!(log.is_empty());
    }
}
