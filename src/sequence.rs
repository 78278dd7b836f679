//! Sqrt-decomposed move-to-back sequence over the universe `1..=N`.
//!
//! [`BlockedSequence`] keeps the values `1..=N` in least- to most-recently-used
//! order. [`fetch`](BlockedSequence::fetch) returns the value at a 1-based
//! position and moves it to the back in `O(sqrt N)` instead of the `O(N)`
//! shift a flat array needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                  BlockedSequence (N = 8, B = 3, M = 3)                      │
//! │                                                                             │
//! │   blocks: Box<[BlockRing]>        each block always full                    │
//! │                                                                             │
//! │   position:    1   2   3     4   5   6     7   8                            │
//! │              ┌───┬───┬───┐ ┌───┬───┬───┐ ┌───┬───┐                          │
//! │   initial:   │ 1 │ 2 │ 3 │ │ 4 │ 5 │ 6 │ │ 7 │ 8 │                          │
//! │              └───┴───┴───┘ └───┴───┴───┘ └───┴───┘                          │
//! │                block 0       block 1      block 2 (capacity N - 2B = 2)     │
//! │                                                                             │
//! │   fetch(5):                                                                 │
//! │     1. locate: block (5-1)/3 = 1, offset (5-1)%3 = 1  → value 5             │
//! │     2. shift block 1 toward the hole      [4, 6, _]                         │
//! │     3. cascade: block 2 front (7) → block 1 back; block 2 rotates [8, _]    │
//! │     4. tail fill: 5 → block 2 back                                          │
//! │                                                                             │
//! │              ┌───┬───┬───┐ ┌───┬───┬───┐ ┌───┬───┐                          │
//! │   after:     │ 1 │ 2 │ 3 │ │ 4 │ 6 │ 7 │ │ 8 │ 5 │                          │
//! │              └───┴───┴───┘ └───┴───┴───┘ └───┴───┘                          │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Geometry
//!
//! - Block size `B = ceil(sqrt(N))`, computed in integers.
//! - Block count `M = ceil(N / B)`.
//! - Every block holds `B` values except the last, which holds `N mod B`
//!   when that is nonzero.
//!
//! ## Operations
//!
//! | Operation   | Time       | Notes                                        |
//! |-------------|------------|----------------------------------------------|
//! | `try_new`   | O(N)       | Only allocation the structure ever performs  |
//! | `peek`      | O(1)       | Read path, no reordering                     |
//! | `fetch`     | O(sqrt N)  | `O(B)` shift + `O(M)` cascade                |
//! | `reset`     | O(N)       | Restores `1..=N` in place                    |
//! | `iter`      | O(N)       | Logical order, position 1 first              |
//!
//! ## Example Usage
//!
//! ```
//! use mrukit::sequence::BlockedSequence;
//!
//! let mut seq = BlockedSequence::try_new(8)?;
//!
//! assert_eq!(seq.fetch(5)?, 5);
//! assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 7, 8, 5]);
//!
//! assert_eq!(seq.fetch(6)?, 7);
//! assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 8, 5, 7]);
//!
//! // Out-of-range positions are reported, never clamped
//! assert!(seq.fetch(0).is_err());
//! assert!(seq.fetch(9).is_err());
//! # Ok::<(), mrukit::error::SequenceError>(())
//! ```
//!
//! ## Thread Safety
//!
//! Not internally synchronized; `fetch` takes `&mut self`. Wrap the sequence
//! in a lock to share it. With the `metrics` feature enabled the read-path
//! counters use `Cell`, so the type is `Send` but not `Sync`.

use tracing::{debug, trace};

use crate::ds::BlockRing;
use crate::error::{InvariantError, SequenceError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SequenceMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SequenceMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, SequenceMetricsReadRecorder, SequenceMetricsRecorder,
};
use crate::traits::MoveToBack;

/// `ceil(sqrt(n))` without floating point.
#[inline]
fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// Capacity of block `index` for a universe of `upper_limit` values.
#[inline]
fn block_capacity(
    index: usize,
    block_count: usize,
    block_size: usize,
    upper_limit: usize,
) -> usize {
    let remainder = upper_limit % block_size;
    if index + 1 < block_count || remainder == 0 {
        block_size
    } else {
        remainder
    }
}

/// Move-to-back sequence over `1..=N` backed by `ceil(sqrt(N))` ring buffers.
///
/// # Example
///
/// ```
/// use mrukit::sequence::BlockedSequence;
///
/// let mut seq = BlockedSequence::new(10);
/// assert_eq!(seq.block_size(), 4);
/// assert_eq!(seq.block_count(), 3);
///
/// let v = seq.fetch(2).unwrap();
/// assert_eq!(v, 2);
/// assert_eq!(seq.peek(10), Ok(2));
/// ```
#[derive(Debug, Clone)]
pub struct BlockedSequence {
    blocks: Box<[BlockRing]>,
    block_size: usize,
    len: usize,

    #[cfg(feature = "metrics")]
    metrics: SequenceMetrics,
}

impl BlockedSequence {
    /// Creates the sequence `1, 2, .., upper_limit`, least-recent first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidConstructionSize`] if `upper_limit`
    /// is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::sequence::BlockedSequence;
    ///
    /// let seq = BlockedSequence::try_new(5).unwrap();
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(BlockedSequence::try_new(0).is_err());
    /// ```
    pub fn try_new(upper_limit: usize) -> Result<Self, SequenceError> {
        if upper_limit == 0 {
            debug!(upper_limit, "rejected blocked sequence construction");
            return Err(SequenceError::InvalidConstructionSize { upper_limit });
        }

        let block_size = ceil_sqrt(upper_limit);
        let block_count = upper_limit.div_ceil(block_size);
        let blocks: Box<[BlockRing]> = (0..block_count)
            .map(|index| {
                let capacity = block_capacity(index, block_count, block_size, upper_limit);
                BlockRing::new(index * block_size + 1, capacity)
            })
            .collect();

        debug!(upper_limit, block_size, block_count, "built blocked sequence");

        Ok(Self {
            blocks,
            block_size,
            len: upper_limit,
            #[cfg(feature = "metrics")]
            metrics: SequenceMetrics::default(),
        })
    }

    /// Creates the sequence `1, 2, .., upper_limit`.
    ///
    /// # Panics
    ///
    /// Panics if `upper_limit` is zero. See [`try_new`](Self::try_new).
    pub fn new(upper_limit: usize) -> Self {
        match Self::try_new(upper_limit) {
            Ok(seq) => seq,
            Err(e) => panic!("{}", e),
        }
    }

    /// Universe size `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects an empty universe.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest value in the universe (same as [`len`](Self::len)).
    #[inline]
    pub fn upper_limit(&self) -> usize {
        self.len
    }

    /// `B = ceil(sqrt(N))`.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// `M = ceil(N / B)`.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Read-only view of the blocks, in order.
    pub fn blocks(&self) -> &[BlockRing] {
        &self.blocks
    }

    /// Resolves a 1-based position to `(block, physical slot)`.
    #[inline]
    fn locate(&self, index: usize) -> Result<(usize, usize), SequenceError> {
        if index == 0 || index > self.len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let position = index - 1;
        let block = position / self.block_size;
        let slot = self.blocks[block].physical_slot(position % self.block_size);
        Ok((block, slot))
    }

    /// Returns the value at 1-based `index` without reordering.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `1 <= index <= len`.
    pub fn peek(&self, index: usize) -> Result<usize, SequenceError> {
        match self.locate(index) {
            Ok((block, slot)) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_call();
                Ok(self.blocks[block].value_at(slot))
            },
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_out_of_range();
                Err(err)
            },
        }
    }

    /// Returns the value at 1-based `index` and moves it to position `len`.
    ///
    /// Values previously at `index + 1 ..= len` each move one position toward
    /// the front; all other values keep their positions.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `1 <= index <= len`.
    /// The order is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use mrukit::sequence::BlockedSequence;
    ///
    /// let mut seq = BlockedSequence::new(4);
    /// assert_eq!(seq.fetch(1), Ok(1));
    /// assert_eq!(seq.fetch(1), Ok(2));
    /// assert_eq!(seq.to_vec(), vec![3, 4, 1, 2]);
    /// ```
    pub fn fetch(&mut self, index: usize) -> Result<usize, SequenceError> {
        let (block, slot) = match self.locate(index) {
            Ok(found) => found,
            Err(err) => {
                debug!(index, len = self.len, "fetch index out of range");
                #[cfg(feature = "metrics")]
                self.metrics.record_fetch_out_of_range();
                return Err(err);
            },
        };

        let value = self.blocks[block].value_at(slot);
        let _shifted = self.blocks[block].shift_toward_removed(slot);

        // Each later block hands its front to the previous block's open back
        // slot, which moves the hole one block toward the tail.
        let last = self.blocks.len() - 1;
        for j in block..last {
            let carried = self.blocks[j + 1].rotate_front();
            self.blocks[j].set_back(carried);
        }
        self.blocks[last].set_back(value);

        #[cfg(feature = "metrics")]
        self.metrics.record_fetch(_shifted as u64, (last - block) as u64);

        Ok(value)
    }

    /// Restores the initial order `1..=N` without reallocating.
    pub fn reset(&mut self) {
        let block_size = self.block_size;
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.refill(index * block_size + 1);
        }
        trace!(len = self.len, "reset blocked sequence");
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Iterates values in logical order, position 1 first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().flat_map(BlockRing::iter)
    }

    /// Collects the current order, position 1 first.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }

    /// Verifies block geometry, cursor placement, and that the blocks hold a
    /// permutation of `1..=N`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len == 0 {
            return Err(InvariantError::new("sequence has zero length"));
        }
        if self.block_size != ceil_sqrt(self.len) {
            return Err(InvariantError::new(format!(
                "block_size {} != ceil(sqrt({})) = {}",
                self.block_size,
                self.len,
                ceil_sqrt(self.len)
            )));
        }
        let block_count = self.len.div_ceil(self.block_size);
        if self.blocks.len() != block_count {
            return Err(InvariantError::new(format!(
                "block count {} != ceil({} / {}) = {}",
                self.blocks.len(),
                self.len,
                self.block_size,
                block_count
            )));
        }

        let mut seen = vec![false; self.len + 1];
        let mut total = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            let expected = block_capacity(index, block_count, self.block_size, self.len);
            let cap = block.capacity();
            if cap != expected {
                return Err(InvariantError::new(format!(
                    "block {} capacity {} != expected {}",
                    index, cap, expected
                )));
            }
            if block.start() >= cap || block.end() != (block.start() + cap - 1) % cap {
                return Err(InvariantError::new(format!(
                    "block {} cursors out of step: start {}, end {}, capacity {}",
                    index,
                    block.start(),
                    block.end(),
                    cap
                )));
            }
            for value in block.iter() {
                if value == 0 || value > self.len {
                    return Err(InvariantError::new(format!(
                        "block {} holds {} outside 1..={}",
                        index, value, self.len
                    )));
                }
                if std::mem::replace(&mut seen[value], true) {
                    return Err(InvariantError::new(format!(
                        "value {} stored more than once",
                        value
                    )));
                }
            }
            total += cap;
        }
        if total != self.len {
            return Err(InvariantError::new(format!(
                "blocks hold {} slots, expected {}",
                total, self.len
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl MoveToBack for BlockedSequence {
    fn len(&self) -> usize {
        self.len
    }

    fn peek(&self, index: usize) -> Result<usize, SequenceError> {
        BlockedSequence::peek(self, index)
    }

    fn fetch(&mut self, index: usize) -> Result<usize, SequenceError> {
        BlockedSequence::fetch(self, index)
    }

    fn to_vec(&self) -> Vec<usize> {
        BlockedSequence::to_vec(self)
    }
}

#[cfg(feature = "metrics")]
impl BlockedSequence {
    /// Returns a snapshot of sequence metrics.
    pub fn metrics_snapshot(&self) -> SequenceMetricsSnapshot {
        SequenceMetricsSnapshot::capture(
            &self.metrics,
            self.len,
            self.block_size,
            self.blocks.len(),
        )
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<SequenceMetricsSnapshot> for BlockedSequence {
    fn snapshot(&self) -> SequenceMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Geometry
    // ==============================================

    #[test]
    fn ceil_sqrt_matches_definition() {
        for n in 1..=10_000usize {
            let b = ceil_sqrt(n);
            assert!(b * b >= n, "n={n} b={b}");
            assert!((b - 1) * (b - 1) < n, "n={n} b={b}");
        }
    }

    #[test]
    fn geometry_for_small_sizes() {
        // (N, B, M, last capacity)
        let cases = [
            (1, 1, 1, 1),
            (2, 2, 1, 2),
            (3, 2, 2, 1),
            (4, 2, 2, 2),
            (5, 3, 2, 2),
            (8, 3, 3, 2),
            (9, 3, 3, 3),
            (10, 4, 3, 2),
        ];
        for (n, b, m, last) in cases {
            let seq = BlockedSequence::new(n);
            assert_eq!(seq.block_size(), b, "N={n}");
            assert_eq!(seq.block_count(), m, "N={n}");
            assert_eq!(seq.blocks().last().map(BlockRing::capacity), Some(last), "N={n}");
            seq.debug_validate_invariants();
        }
    }

    #[test]
    fn initial_order_is_ascending() {
        let seq = BlockedSequence::new(17);
        assert_eq!(seq.to_vec(), (1..=17).collect::<Vec<_>>());
        for i in 1..=17 {
            assert_eq!(seq.peek(i), Ok(i));
        }
    }

    // ==============================================
    // Construction errors
    // ==============================================

    #[test]
    fn zero_upper_limit_is_rejected() {
        assert_eq!(
            BlockedSequence::try_new(0).unwrap_err(),
            SequenceError::InvalidConstructionSize { upper_limit: 0 }
        );
    }

    #[test]
    #[should_panic(expected = "upper limit must be a positive integer")]
    fn new_panics_on_zero() {
        let _ = BlockedSequence::new(0);
    }

    // ==============================================
    // fetch
    // ==============================================

    #[test]
    fn end_to_end_example_n8() {
        let mut seq = BlockedSequence::new(8);
        assert_eq!(seq.fetch(5), Ok(5));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 7, 8, 5]);
        assert_eq!(seq.fetch(6), Ok(7));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 8, 5, 7]);
        seq.debug_validate_invariants();
    }

    #[test]
    fn single_element_universe() {
        let mut seq = BlockedSequence::new(1);
        assert_eq!(seq.block_count(), 1);
        for _ in 0..5 {
            assert_eq!(seq.fetch(1), Ok(1));
            assert_eq!(seq.to_vec(), vec![1]);
        }
        seq.debug_validate_invariants();
    }

    #[test]
    fn fetch_last_keeps_order() {
        let mut seq = BlockedSequence::new(12);
        seq.fetch(3).unwrap();
        seq.fetch(7).unwrap();
        let before = seq.to_vec();
        let back = before[11];
        assert_eq!(seq.fetch(12), Ok(back));
        assert_eq!(seq.to_vec(), before);
    }

    #[test]
    fn fetched_value_lands_at_back() {
        let mut seq = BlockedSequence::new(30);
        for index in [1, 30, 15, 2, 29, 16, 8] {
            let v = seq.fetch(index).unwrap();
            assert_eq!(seq.peek(30), Ok(v));
            seq.debug_validate_invariants();
        }
    }

    #[test]
    fn fetch_front_repeatedly_rotates_whole_sequence() {
        let n = 11;
        let mut seq = BlockedSequence::new(n);
        for expected in 1..=n {
            assert_eq!(seq.fetch(1), Ok(expected));
        }
        assert_eq!(seq.to_vec(), (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_fetch_does_not_mutate() {
        let mut seq = BlockedSequence::new(8);
        seq.fetch(2).unwrap();
        let before = seq.to_vec();

        assert_eq!(
            seq.fetch(0),
            Err(SequenceError::IndexOutOfRange { index: 0, len: 8 })
        );
        assert_eq!(
            seq.fetch(9),
            Err(SequenceError::IndexOutOfRange { index: 9, len: 8 })
        );
        assert_eq!(seq.to_vec(), before);
    }

    #[test]
    fn out_of_range_peek() {
        let seq = BlockedSequence::new(3);
        assert!(seq.peek(0).unwrap_err().is_out_of_range());
        assert!(seq.peek(4).unwrap_err().is_out_of_range());
    }

    // ==============================================
    // reset / invariants
    // ==============================================

    #[test]
    fn reset_restores_initial_order() {
        let mut seq = BlockedSequence::new(20);
        for i in [3, 19, 1, 20, 7] {
            seq.fetch(i).unwrap();
        }
        assert_ne!(seq.to_vec(), (1..=20).collect::<Vec<_>>());
        seq.reset();
        assert_eq!(seq.to_vec(), (1..=20).collect::<Vec<_>>());
        seq.debug_validate_invariants();
    }

    #[test]
    fn check_invariants_passes_after_mixed_fetches() {
        let mut seq = BlockedSequence::new(50);
        for i in (1..=50).rev().step_by(3) {
            seq.fetch(i).unwrap();
            assert!(seq.check_invariants().is_ok());
        }
    }

    #[test]
    fn check_invariants_rejects_duplicated_value() {
        let mut seq = BlockedSequence::new(9);
        let front = seq.blocks[0].front();
        seq.blocks[1].set_back(front);
        let err = seq.check_invariants().unwrap_err();
        assert!(err.message().contains("value 1 stored more than once"), "{err}");
    }

    #[test]
    fn check_invariants_rejects_cursors_out_of_step() {
        let mut seq = BlockedSequence::new(9);
        seq.blocks[0].advance_start();
        let err = seq.check_invariants().unwrap_err();
        assert!(err.message().contains("block 0 cursors out of step"), "{err}");
    }

    #[test]
    fn check_invariants_rejects_wrong_block_size() {
        let mut seq = BlockedSequence::new(9);
        seq.block_size = 4;
        let err = seq.check_invariants().unwrap_err();
        assert!(err.message().starts_with("block_size 4"), "{err}");
    }

    #[test]
    #[should_panic(expected = "cursors out of step")]
    fn debug_validate_panics_on_corruption() {
        let mut seq = BlockedSequence::new(5);
        seq.blocks[1].advance_end();
        seq.debug_validate_invariants();
    }

    #[test]
    fn trait_view_matches_inherent_methods() {
        let mut seq = BlockedSequence::new(6);
        let via_trait = MoveToBack::fetch_batch(&mut seq, &[2, 2, 6]).unwrap();
        assert_eq!(via_trait, vec![2, 3, 3]);
        assert_eq!(MoveToBack::to_vec(&seq), seq.to_vec());
        assert!(!MoveToBack::is_empty(&seq));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_shift_and_cascade_work() {
        let mut seq = BlockedSequence::new(9); // B = 3, M = 3
        seq.fetch(1).unwrap(); // shift 2, cascade 2
        seq.fetch(9).unwrap(); // shift 0, cascade 0
        let _ = seq.fetch(10);
        let _ = seq.peek(4);
        let _ = seq.peek(0);

        let snap = seq.metrics_snapshot();
        assert_eq!(snap.fetch_calls, 3);
        assert_eq!(snap.fetch_out_of_range, 1);
        assert_eq!(snap.shifted_slots, 2);
        assert_eq!(snap.cascade_steps, 2);
        assert_eq!(snap.peek_calls, 2);
        assert_eq!(snap.peek_out_of_range, 1);
        assert_eq!((snap.len, snap.block_size, snap.block_count), (9, 3, 3));
    }
}
