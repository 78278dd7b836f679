//! Fixed-capacity, always-full ring buffer backing one block of a
//! [`BlockedSequence`](crate::sequence::BlockedSequence).
//!
//! A block never grows or shrinks. Removing an interior element shifts its
//! successors one slot toward the front and leaves the `end` slot stale; the
//! caller immediately refills that slot (from the next block's front, or with
//! the fetched value when this is the last block).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                         BlockRing (capacity = 4)                            │
//! │                                                                             │
//! │   slots: Box<[usize]>      start: logical front      end: logical back      │
//! │   invariant: end == (start + capacity - 1) % capacity                       │
//! │                                                                             │
//! │   After two rotate_front() calls on [1, 2, 3, 4] (backs refilled 9, 10):    │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   slots:   │  9  │ 10  │  3  │  4  │     logical order: 3, 4, 9, 10         │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │                    ▲     ▲                                                  │
//! │                    │     └── start = 2                                      │
//! │                    └──────── end   = 1                                      │
//! │                                                                             │
//! │   shift_toward_removed(slot 3):   (removes logical value 4)                 │
//! │     slots[3] = slots[0]   → 9                                               │
//! │     slots[0] = slots[1]   → 10                                              │
//! │     stop at end (slot 1), which now holds a stale 10                        │
//! │     caller: set_back(x)   → logical order 3, 9, 10, x                       │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation                  | Description                           | Complexity |
//! |----------------------------|---------------------------------------|------------|
//! | [`get`]                    | Value at a logical offset             | O(1)       |
//! | [`front`] / [`back`]       | Logical first / last value            | O(1)       |
//! | [`rotate_front`]           | Take front, open a hole at the back   | O(1)       |
//! | [`shift_toward_removed`]   | Close an interior gap                 | O(capacity)|
//! | [`refill`]                 | Restore a contiguous ascending run    | O(capacity)|
//!
//! [`get`]: BlockRing::get
//! [`front`]: BlockRing::front
//! [`back`]: BlockRing::back
//! [`rotate_front`]: BlockRing::rotate_front
//! [`shift_toward_removed`]: BlockRing::shift_toward_removed
//! [`refill`]: BlockRing::refill
//!
//! ## Example Usage
//!
//! ```
//! use mrukit::ds::BlockRing;
//!
//! // Block holding the run 5, 6, 7
//! let mut ring = BlockRing::new(5, 3);
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![5, 6, 7]);
//!
//! // Hand the front to the previous block and accept 42 at the back
//! let carried = ring.rotate_front();
//! ring.set_back(42);
//! assert_eq!(carried, 5);
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![6, 7, 42]);
//! ```
//!
//! ## Thread Safety
//!
//! `BlockRing` is not internally synchronized. It is owned by the enclosing
//! sequence and mutated only through `&mut self`.

use std::iter::FusedIterator;

/// Fixed-capacity ring of `usize` values with `start` / `end` cursors.
///
/// The ring is logically full at all times: reading `capacity` steps from
/// `start` yields every stored value, ending at `end`.
#[derive(Debug, Clone)]
pub struct BlockRing {
    slots: Box<[usize]>,
    start: usize,
    end: usize,
}

impl BlockRing {
    /// Creates a ring holding the ascending run `first, first + 1, ..`
    /// of length `capacity`, with `start = 0` and `end = capacity - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::ds::BlockRing;
    ///
    /// let ring = BlockRing::new(1, 4);
    /// assert_eq!(ring.capacity(), 4);
    /// assert_eq!(ring.start(), 0);
    /// assert_eq!(ring.end(), 3);
    /// ```
    pub fn new(first: usize, capacity: usize) -> Self {
        assert!(capacity > 0, "BlockRing capacity must be greater than zero");
        let slots: Box<[usize]> = (first..first + capacity).collect();
        Self {
            slots,
            start: 0,
            end: capacity - 1,
        }
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Physical index of the logical front.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Physical index of the logical back.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Maps a logical offset (`0` = front) to its physical slot.
    ///
    /// The caller guarantees `offset < capacity`.
    #[inline]
    pub fn physical_slot(&self, offset: usize) -> usize {
        debug_assert!(offset < self.capacity());
        (self.start + offset) % self.capacity()
    }

    /// Returns the value stored in physical slot `slot`.
    #[inline]
    pub fn value_at(&self, slot: usize) -> usize {
        self.slots[slot]
    }

    /// Returns the value at logical offset `offset`, or `None` past the back.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::ds::BlockRing;
    ///
    /// let ring = BlockRing::new(10, 3);
    /// assert_eq!(ring.get(0), Some(10));
    /// assert_eq!(ring.get(2), Some(12));
    /// assert_eq!(ring.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, offset: usize) -> Option<usize> {
        if offset >= self.capacity() {
            return None;
        }
        Some(self.slots[self.physical_slot(offset)])
    }

    /// Logical first value.
    #[inline]
    pub fn front(&self) -> usize {
        self.slots[self.start]
    }

    /// Logical last value (stale between a shift and the matching `set_back`).
    #[inline]
    pub fn back(&self) -> usize {
        self.slots[self.end]
    }

    /// Overwrites the slot at `end`.
    #[inline]
    pub fn set_back(&mut self, value: usize) {
        self.slots[self.end] = value;
    }

    /// `start = (start + 1) mod capacity`.
    #[inline]
    pub fn advance_start(&mut self) {
        self.start = self.wrap_next(self.start);
    }

    /// `end = (end + 1) mod capacity`.
    #[inline]
    pub fn advance_end(&mut self) {
        self.end = self.wrap_next(self.end);
    }

    /// Removes the logical front and returns it.
    ///
    /// Both cursors advance, so the old front's physical slot becomes the new
    /// `end`; it still holds the returned value until the caller writes the
    /// block's new back with [`set_back`](Self::set_back).
    #[inline]
    pub fn rotate_front(&mut self) -> usize {
        let value = self.front();
        self.advance_start();
        self.advance_end();
        value
    }

    /// Closes the gap at physical slot `removed_slot`.
    ///
    /// Walks from `removed_slot` to `end` circularly, copying each successor
    /// one slot backward. The `end` slot is left holding stale data and must
    /// be overwritten with [`set_back`](Self::set_back) before the ring is
    /// read again. Returns the number of slots copied.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::ds::BlockRing;
    ///
    /// let mut ring = BlockRing::new(1, 4);
    /// let moved = ring.shift_toward_removed(1); // drop value 2
    /// ring.set_back(99);
    /// assert_eq!(moved, 2);
    /// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1, 3, 4, 99]);
    /// ```
    pub fn shift_toward_removed(&mut self, removed_slot: usize) -> usize {
        debug_assert!(removed_slot < self.capacity());
        let mut slot = removed_slot;
        let mut moved = 0;
        while slot != self.end {
            let next = self.wrap_next(slot);
            self.slots[slot] = self.slots[next];
            slot = next;
            moved += 1;
        }
        moved
    }

    /// Rewrites the ring as the ascending run starting at `first` and resets
    /// both cursors. Does not reallocate.
    pub fn refill(&mut self, first: usize) {
        for (slot, value) in self.slots.iter_mut().zip(first..) {
            *slot = value;
        }
        self.start = 0;
        self.end = self.slots.len() - 1;
    }

    /// Iterates values in logical order (front to back).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            offset: 0,
        }
    }

    #[inline]
    fn wrap_next(&self, slot: usize) -> usize {
        let next = slot + 1;
        if next == self.slots.len() { 0 } else { next }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let cap = self.capacity();
        assert!(cap > 0);
        assert!(self.start < cap);
        assert!(self.end < cap);
        assert_eq!(self.end, (self.start + cap - 1) % cap);
    }
}

// Logical content equality; two rings holding the same run at different
// rotations compare equal.
impl PartialEq for BlockRing {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl Eq for BlockRing {}

impl<'a> IntoIterator for &'a BlockRing {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed iterator over a [`BlockRing`] in logical order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    ring: &'a BlockRing,
    offset: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let value = self.ring.get(self.offset)?;
        self.offset += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.capacity() - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
