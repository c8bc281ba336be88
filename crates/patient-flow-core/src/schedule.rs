//! Per-doctor slot schedule.
//!
//! Slots live in a deque. New slots are inserted at the front, so the
//! traversal order is newest-first and carries no chronological meaning.
//! "Next free" therefore means the first free slot in traversal order,
//! not the earliest one.

use std::collections::VecDeque;

use chrono::NaiveTime;

use crate::models::{Slot, SlotId, SlotStatus};

/// Ordered collection of one doctor's slots.
#[derive(Debug, Clone, Default)]
pub struct SlotSchedule {
    slots: VecDeque<Slot>,
}

impl SlotSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a `Free` slot with an already-issued id. O(1).
    pub fn insert(&mut self, id: SlotId, start: NaiveTime, end: NaiveTime) {
        tracing::debug!(slot_id = id, %start, %end, "Inserting slot");
        self.slots.push_front(Slot::new(id, start, end));
    }

    /// Remove the slot with the given id. Returns the removed slot, or `None`
    /// if no such slot exists. O(k).
    pub fn cancel(&mut self, id: SlotId) -> Option<Slot> {
        let position = self.slots.iter().position(|s| s.id == id)?;
        self.slots.remove(position)
    }

    /// First slot in traversal order whose status is `Free`.
    pub fn find_next_free(&self) -> Option<&Slot> {
        self.slots.iter().find(|s| s.is_free())
    }

    /// Set a slot's status in place. Returns `false` if the id is unknown.
    pub fn update_status(&mut self, id: SlotId, status: SlotStatus) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Iterate slots in current internal order.
    pub fn traverse(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    /// Count of slots with the given status.
    pub fn count_with_status(&self, status: SlotStatus) -> usize {
        self.slots.iter().filter(|s| s.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
