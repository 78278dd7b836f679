//! # Move-to-Back Sequence Trait
//!
//! The single contract shared by every sequence implementation in this crate.
//! Tests, benches, fuzz targets and the profiling binary are written against
//! [`MoveToBack`] so the sqrt-decomposed structure and the linear baseline can
//! be swapped freely and compared step for step.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────────────┐
//!                 │               MoveToBack                │
//!                 │                                         │
//!                 │  len(&) → usize                         │
//!                 │  peek(&, index) → Result<usize>         │
//!                 │  fetch(&mut, index) → Result<usize>     │
//!                 │  fetch_batch(&mut, &[index])            │
//!                 │  to_vec(&) → Vec<usize>                 │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!                ┌───────────────────┴────────────────────┐
//!                ▼                                        ▼
//!   ┌────────────────────────────┐          ┌────────────────────────────┐
//!   │      BlockedSequence       │          │       LinearSequence       │
//!   │  O(sqrt N) fetch           │          │  O(N) fetch (baseline)     │
//!   └────────────────────────────┘          └────────────────────────────┘
//! ```
//!
//! ## Contract
//!
//! - Positions are 1-based and valid in `[1, len]`.
//! - `fetch(index)` returns the value at `index` and moves it to position
//!   `len`; values after `index` shift one position toward the front.
//! - An out-of-range index returns
//!   [`SequenceError::IndexOutOfRange`](crate::error::SequenceError::IndexOutOfRange)
//!   and leaves the order untouched.
//! - `len` never changes after construction.

use crate::error::SequenceError;

/// A fixed universe of values kept in least- to most-recently-used order.
pub trait MoveToBack {
    /// Number of positions (the universe size `N`).
    fn len(&self) -> usize;

    /// Always `false` for the sequences in this crate, which reject `N = 0`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at 1-based `index` without reordering.
    fn peek(&self, index: usize) -> Result<usize, SequenceError>;

    /// Returns the value at 1-based `index` and moves it to the back.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::sequence::BlockedSequence;
    /// use mrukit::traits::MoveToBack;
    ///
    /// fn touch_front<S: MoveToBack>(seq: &mut S) -> usize {
    ///     seq.fetch(1).unwrap()
    /// }
    ///
    /// let mut seq = BlockedSequence::new(4);
    /// assert_eq!(touch_front(&mut seq), 1);
    /// assert_eq!(MoveToBack::to_vec(&seq), vec![2, 3, 4, 1]);
    /// ```
    fn fetch(&mut self, index: usize) -> Result<usize, SequenceError>;

    /// Applies [`fetch`](Self::fetch) to each index in turn.
    ///
    /// Stops at the first out-of-range index; fetches before it have already
    /// been applied.
    fn fetch_batch(&mut self, indices: &[usize]) -> Result<Vec<usize>, SequenceError> {
        indices.iter().map(|&index| self.fetch(index)).collect()
    }

    /// Collects the current order, position 1 first.
    fn to_vec(&self) -> Vec<usize> {
        (1..=self.len())
            .map_while(|index| self.peek(index).ok())
            .collect()
    }
}
