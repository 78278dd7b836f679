//! mrukit: a move-to-back sequence over a fixed integer universe.
//!
//! [`BlockedSequence`](sequence::BlockedSequence) answers "give me the value at
//! position `k` and make it the most recently used" in `O(sqrt N)` by splitting
//! the order into `ceil(sqrt N)` ring-buffer blocks.
//! [`LinearSequence`](linear::LinearSequence) is the `O(N)` flat-array
//! baseline with the same [`MoveToBack`](traits::MoveToBack) contract.

pub mod ds;
pub mod error;
pub mod linear;
pub mod sequence;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
