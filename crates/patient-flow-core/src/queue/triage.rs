//! Emergency triage as an array-backed binary min-heap.
//!
//! Entries are ordered by severity only. Equal severities come out in
//! whatever order the sift swaps leave them; there is no FIFO tie-break.

use serde::{Deserialize, Serialize};

use crate::models::{PatientId, Severity};

/// A severity-ranked emergency admission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageEntry {
    pub severity: Severity,
    pub patient_id: PatientId,
}

/// Min-heap of triage entries keyed on severity.
#[derive(Debug, Clone, Default)]
pub struct TriageQueue {
    heap: Vec<TriageEntry>,
}

impl TriageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and restore heap order upward. O(log n).
    pub fn insert(&mut self, patient_id: PatientId, severity: Severity) {
        self.heap.push(TriageEntry {
            severity,
            patient_id,
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the lowest-severity entry. O(log n).
    pub fn extract_min(&mut self) -> Option<TriageEntry> {
        match self.heap.len() {
            0 => None,
            1 => self.heap.pop(),
            _ => {
                // swap_remove moves the last entry into the root slot
                let root = self.heap.swap_remove(0);
                self.sift_down(0);
                Some(root)
            }
        }
    }

    pub fn peek(&self) -> Option<&TriageEntry> {
        self.heap.first()
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].severity >= self.heap[parent].severity {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].severity < self.heap[smallest].severity {
                smallest = left;
            }
            if right < len && self.heap[right].severity < self.heap[smallest].severity {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
