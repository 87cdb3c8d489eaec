use std::collections::VecDeque;

use crate::canvas::Snapshot;

/// Linear undo/redo over ink snapshots.
///
/// The undo stack holds the state *before* each recorded action; the redo
/// stack holds states that were current when an undo happened. Recording a
/// new action discards the redo stack.
pub struct SnapshotHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
}

impl SnapshotHistory {
    /// An empty history keeping at most `capacity` undo steps (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an action, given the canvas state from before it.
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push_back(before);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Step back. `current` goes onto the redo stack and the state to
    /// restore is returned; `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        Some(next)
    }

    /// Whether [`Self::undo`] would return a snapshot.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether [`Self::redo`] would return a snapshot.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of steps that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most undo steps kept; older ones are dropped.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl std::fmt::Debug for SnapshotHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotHistory")
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
