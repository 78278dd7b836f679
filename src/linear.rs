//! Flat-array move-to-back sequence.
//!
//! [`LinearSequence`] stores `1..=N` in one boxed slice and shifts the whole
//! suffix on every fetch. It has the same contract as
//! [`BlockedSequence`](crate::sequence::BlockedSequence) at `O(N)` per fetch,
//! and serves as the reference model in tests and the baseline in benches.
//!
//! ## Example Usage
//!
//! ```
//! use mrukit::linear::LinearSequence;
//!
//! let mut seq = LinearSequence::new(5);
//! assert_eq!(seq.fetch(2), Ok(2));
//! assert_eq!(seq.as_slice(), &[1, 3, 4, 5, 2]);
//! ```

use tracing::{debug, trace};

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

/// Move-to-back sequence over `1..=N` backed by a single slice.
#[derive(Debug, Clone)]
pub struct LinearSequence {
    values: Box<[usize]>,

    #[cfg(feature = "metrics")]
    metrics: SequenceMetrics,
}

impl LinearSequence {
    /// Creates the sequence `1, 2, .., upper_limit`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidConstructionSize`] if `upper_limit`
    /// is zero.
    pub fn try_new(upper_limit: usize) -> Result<Self, SequenceError> {
        if upper_limit == 0 {
            debug!(upper_limit, "rejected linear sequence construction");
            return Err(SequenceError::InvalidConstructionSize { upper_limit });
        }
        Ok(Self {
            values: (1..=upper_limit).collect(),
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

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value in the universe (same as [`len`](Self::len)).
    #[inline]
    pub fn upper_limit(&self) -> usize {
        self.values.len()
    }

    /// Current order, position 1 first.
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index == 0 || index > self.values.len() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Returns the value at 1-based `index` without reordering.
    pub fn peek(&self, index: usize) -> Result<usize, SequenceError> {
        match self.check_index(index) {
            Ok(()) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_call();
                Ok(self.values[index - 1])
            },
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_out_of_range();
                Err(err)
            },
        }
    }

    /// Returns the value at 1-based `index` and rotates it to the back.
    pub fn fetch(&mut self, index: usize) -> Result<usize, SequenceError> {
        if let Err(err) = self.check_index(index) {
            debug!(index, len = self.values.len(), "fetch index out of range");
            #[cfg(feature = "metrics")]
            self.metrics.record_fetch_out_of_range();
            return Err(err);
        }
        let value = self.values[index - 1];
        self.values[index - 1..].rotate_left(1);

        #[cfg(feature = "metrics")]
        self.metrics.record_fetch((self.values.len() - index) as u64, 0);

        Ok(value)
    }

    /// Restores the initial order `1..=N` in place.
    pub fn reset(&mut self) {
        for (slot, value) in self.values.iter_mut().zip(1..) {
            *slot = value;
        }
        trace!(len = self.values.len(), "reset linear sequence");
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Iterates values in logical order, position 1 first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    /// Collects the current order, position 1 first.
    pub fn to_vec(&self) -> Vec<usize> {
        self.values.to_vec()
    }

    /// Verifies that the slice holds a permutation of `1..=N`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.values.len();
        if len == 0 {
            return Err(InvariantError::new("sequence has zero length"));
        }
        let mut seen = vec![false; len + 1];
        for (position, &value) in self.values.iter().enumerate() {
            if value == 0 || value > len {
                return Err(InvariantError::new(format!(
                    "position {} holds {} outside 1..={}",
                    position + 1,
                    value,
                    len
                )));
            }
            if std::mem::replace(&mut seen[value], true) {
                return Err(InvariantError::new(format!(
                    "value {} stored more than once",
                    value
                )));
            }
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

impl MoveToBack for LinearSequence {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn peek(&self, index: usize) -> Result<usize, SequenceError> {
        LinearSequence::peek(self, index)
    }

    fn fetch(&mut self, index: usize) -> Result<usize, SequenceError> {
        LinearSequence::fetch(self, index)
    }

    fn to_vec(&self) -> Vec<usize> {
        LinearSequence::to_vec(self)
    }
}

#[cfg(feature = "metrics")]
impl LinearSequence {
    /// Returns a snapshot of sequence metrics; the slice counts as one block.
    pub fn metrics_snapshot(&self) -> SequenceMetricsSnapshot {
        let len = self.values.len();
        SequenceMetricsSnapshot::capture(&self.metrics, len, len, 1)
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<SequenceMetricsSnapshot> for LinearSequence {
    fn snapshot(&self) -> SequenceMetricsSnapshot {
        self.metrics_snapshot()
    }
}
