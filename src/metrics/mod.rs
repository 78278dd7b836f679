//! Operation counters for sequence implementations (feature `metrics`).
//!
//! [`traits`] defines the recording and snapshot contracts, [`metrics_impl`]
//! holds the plain counter storage embedded in each sequence, and
//! [`snapshot`] is the `Copy` view handed to benches and tests.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
