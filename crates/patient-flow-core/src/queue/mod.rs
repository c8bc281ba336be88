//! Waiting lines: the bounded routine queue and the emergency triage heap.

mod routine;
mod triage;

pub use routine::*;
pub use triage::*;

use thiserror::Error;

/// Queue errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Queue capacity must be at least 1")]
    ZeroCapacity,
}

pub type QueueResult<T> = Result<T, QueueError>;
