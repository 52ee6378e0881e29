//! Two-sided tape
//!
//! The tape is split at the head into two stacks around the head cell.
//! `left` holds the cells to the left of the head and `right` the cells to
//! its right, nearest cell last on both. Both stacks are non-empty at all
//! times: a move that empties one side grows it with a zero cell.

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    left: Vec<u8>,
    head: u8,
    right: Vec<u8>,
    position: i64,
    limit: Option<u64>,
}

impl Tape {
    /// Create a zeroed tape. `limit` bounds the head distance from the start cell.
    pub fn new(limit: Option<u64>) -> Self {
        Tape {
            left: vec![0],
            head: 0,
            right: vec![0],
            position: 0,
            limit,
        }
    }

    /// Head position relative to the start cell
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    #[inline]
    pub fn read_head(&self) -> u8 {
        self.head
    }

    #[inline]
    pub fn write_head(&mut self, value: u8) {
        self.head = value;
    }

    #[inline]
    pub fn increment(&mut self) {
        self.head = self.head.wrapping_add(1);
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.head = self.head.wrapping_sub(1);
    }

    pub fn move_left(&mut self) -> Result<()> {
        let target = self.checked_target(-1)?;
        self.right.push(self.head);
        self.head = self.left.pop().unwrap_or(0);
        if self.left.is_empty() {
            self.left.push(0);
        }
        self.position = target;
        Ok(())
    }

    pub fn move_right(&mut self) -> Result<()> {
        let target = self.checked_target(1)?;
        self.left.push(self.head);
        self.head = self.right.pop().unwrap_or(0);
        if self.right.is_empty() {
            self.right.push(0);
        }
        self.position = target;
        Ok(())
    }

    fn checked_target(&self, delta: i64) -> Result<i64> {
        let limit = self.limit.unwrap_or(u64::MAX);
        match self.position.checked_add(delta) {
            Some(target) if target.unsigned_abs() <= limit => Ok(target),
            Some(target) => Err(RuntimeError::TapeLimitExceeded { position: target, limit }),
            None => Err(RuntimeError::TapeLimitExceeded {
                position: self.position,
                limit,
            }),
        }
    }

    /// Cells stored on each side of the head: `(left, right)`
    pub fn side_lengths(&self) -> (usize, usize) {
        (self.left.len(), self.right.len())
    }

    /// Materialised cells from leftmost to rightmost
    pub fn cells(&self) -> Vec<u8> {
        let mut cells = self.left.clone();
        cells.push(self.head);
        cells.extend(self.right.iter().rev());
        cells
    }

    /// Index of the head within [`Tape::cells`]
    pub fn head_index(&self) -> usize {
        self.left.len()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(None)
    }
}
