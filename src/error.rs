//! Error types for the mrukit library.
//!
//! ## Key Components
//!
//! - [`SequenceError`]: Returned by fallible constructors and by positional
//!   access (`fetch` / `peek`) when an argument is out of range.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use mrukit::error::SequenceError;
//! use mrukit::sequence::BlockedSequence;
//!
//! // Fallible constructor for user-supplied sizes
//! let seq: Result<BlockedSequence, SequenceError> = BlockedSequence::try_new(16);
//! assert!(seq.is_ok());
//!
//! // A zero-sized universe is rejected without panicking
//! let bad = BlockedSequence::try_new(0);
//! assert_eq!(bad.unwrap_err(), SequenceError::InvalidConstructionSize { upper_limit: 0 });
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// SequenceError
// ---------------------------------------------------------------------------

/// Error returned by sequence construction and positional access.
///
/// Neither variant leaves partial state behind: a failed constructor yields no
/// instance, and a failed `fetch` applies no shift.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The universe size passed to a constructor was not a positive integer.
    #[error("upper limit must be a positive integer, got {upper_limit}")]
    InvalidConstructionSize { upper_limit: usize },

    /// A 1-based position fell outside `[1, len]`.
    #[error("index {index} is out of range 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SequenceError {
    /// Returns `true` for [`SequenceError::IndexOutOfRange`].
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal sequence invariants are violated.
///
/// Produced by
/// [`BlockedSequence::check_invariants`](crate::sequence::BlockedSequence::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- SequenceError ----------------------------------------------------

    #[test]
    fn construction_display_names_the_size() {
        let err = SequenceError::InvalidConstructionSize { upper_limit: 0 };
        assert_eq!(err.to_string(), "upper limit must be a positive integer, got 0");
    }

    #[test]
    fn out_of_range_display_names_index_and_bounds() {
        let err = SequenceError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "index 9 is out of range 1..=8");
    }

    #[test]
    fn is_out_of_range_discriminates() {
        assert!(SequenceError::IndexOutOfRange { index: 0, len: 1 }.is_out_of_range());
        assert!(!SequenceError::InvalidConstructionSize { upper_limit: 0 }.is_out_of_range());
    }

    #[test]
    fn sequence_error_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SequenceError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("block 2 cursor mismatch");
        assert_eq!(err.to_string(), "block 2 cursor mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
