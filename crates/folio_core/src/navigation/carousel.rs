//! Circular carousel cursor.
//!
//! # Invariants
//! - `cursor < len` whenever `len > 0`.
//! - `next`/`previous` wrap around; on an empty carousel they are no-ops.
//! - Shrinking the sequence clamps the cursor to the new last index.

use crate::navigation::NavigationError;
use log::trace;

/// Cursor over a sequence of `len` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    cursor: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel focused on the first item.
    ///
    /// # Errors
    /// - `EmptyCollection` when `len == 0`.
    pub fn new(len: usize) -> Result<Self, NavigationError> {
        if len == 0 {
            return Err(NavigationError::EmptyCollection);
        }
        Ok(Self { cursor: 0, len })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances one step, wrapping from the last item to the first.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 == self.len {
            0
        } else {
            self.cursor + 1
        };
        trace!("event=carousel_next module=navigation cursor={}", self.cursor);
    }

    /// Steps back one item, wrapping from the first item to the last.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.len - 1
        } else {
            self.cursor - 1
        };
        trace!("event=carousel_previous module=navigation cursor={}", self.cursor);
    }

    /// Focuses `index` directly.
    ///
    /// # Errors
    /// - `OutOfRange` when `index >= len`; the cursor is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.len {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Adopts a new sequence length, clamping the cursor if it fell off.
    pub fn on_length_changed(&mut self, new_len: usize) {
        self.len = new_len;
        if self.cursor >= new_len {
            self.cursor = new_len.saturating_sub(1);
            trace!(
                "event=carousel_clamped module=navigation cursor={} len={}",
                self.cursor,
                new_len
            );
        }
    }

    /// Item under the cursor, if `items` is long enough to contain it.
    pub fn current_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        items.get(self.cursor)
    }
}
