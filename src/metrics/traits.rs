//! # Metrics Traits
//!
//! Recording is separated from snapshotting so a sequence only ever writes
//! counters, and benches/tests only ever read them.
//!
//! ```text
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ SequenceMetricsRecorder      │    │ SequenceMetricsReadRecorder  │
//!   │ fetch / out-of-range / reset │    │ peek (through &self)         │
//!   └──────────────┬───────────────┘    └──────────────┬───────────────┘
//!                  │                                   │
//!                  └─────────────┬─────────────────────┘
//!                                ▼
//!                       ┌──────────────────┐
//!                       │ SequenceMetrics  │
//!                       └────────┬─────────┘
//!                                ▼
//!                ┌──────────────────────────────┐
//!                │ MetricsSnapshotProvider<S>   │
//!                │ (bench/test)                 │
//!                └──────────────────────────────┘
//! ```

/// Counters written by the mutating path.
pub trait SequenceMetricsRecorder {
    /// A successful `fetch` that copied `shifted_slots` values inside the
    /// source block and walked `cascade_steps` block boundaries.
    fn record_fetch(&mut self, shifted_slots: u64, cascade_steps: u64);
    fn record_fetch_out_of_range(&mut self);
    fn record_reset(&mut self);
}

/// Counters written from `&self` methods (uses interior mutability).
pub trait SequenceMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_out_of_range(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
