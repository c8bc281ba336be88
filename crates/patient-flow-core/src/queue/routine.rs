//! Fixed-capacity FIFO of routine booking tokens.

use crate::models::Token;

use super::{QueueError, QueueResult};

/// Default number of tokens the routine queue holds.
pub const DEFAULT_ROUTINE_CAPACITY: usize = 10;

/// Circular buffer of tokens awaiting service.
///
/// Emptiness is tracked by `head == None` rather than by comparing head and
/// tail, so a full buffer and an empty buffer never look alike.
#[derive(Debug, Clone)]
pub struct RoutineQueue {
    buffer: Vec<Option<Token>>,
    /// Read position; `None` while the queue is empty
    head: Option<usize>,
    /// Position of the most recent write; meaningless while empty
    tail: usize,
}

impl RoutineQueue {
    /// Create an empty queue holding at most `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> QueueResult<Self> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(Self {
            buffer: vec![None; capacity],
            head: None,
            tail: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Append a token. Fails without overwriting when the next write position
    /// would land on the read position.
    pub fn enqueue(&mut self, token: Token) -> QueueResult<()> {
        let capacity = self.capacity();
        match self.head {
            Some(head) => {
                let next = (self.tail + 1) % capacity;
                if next == head {
                    return Err(QueueError::Full { capacity });
                }
                self.tail = next;
            }
            None => {
                self.head = Some(0);
                self.tail = 0;
            }
        }
        self.buffer[self.tail] = Some(token);
        Ok(())
    }

    /// Remove and return the oldest token.
    pub fn dequeue(&mut self) -> Option<Token> {
        let head = self.head?;
        let token = self.buffer[head].take();
        self.head = if head == self.tail {
            None
        } else {
            Some((head + 1) % self.capacity())
        };
        token
    }

    /// Oldest token, without removing it.
    pub fn peek(&self) -> Option<&Token> {
        self.head.and_then(|head| self.buffer[head].as_ref())
    }

    /// Number of queued tokens, derived from head and tail positions.
    pub fn size(&self) -> usize {
        match self.head {
            None => 0,
            Some(head) if head <= self.tail => self.tail - head + 1,
            Some(head) => self.capacity() - head + self.tail + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }
}

impl Default for RoutineQueue {
    fn default() -> Self {
        Self {
            buffer: vec![None; DEFAULT_ROUTINE_CAPACITY],
            head: None,
            tail: 0,
        }
    }
}
