use crate::metrics::metrics_impl::SequenceMetrics;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMetricsSnapshot {
    pub fetch_calls: u64,
    pub fetch_out_of_range: u64,
    pub shifted_slots: u64, // values copied inside the source block
    pub cascade_steps: u64, // block boundaries crossed by the cascade
    pub resets: u64,

    pub peek_calls: u64,
    pub peek_out_of_range: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub block_size: usize,
    pub block_count: usize,
}

impl SequenceMetricsSnapshot {
    pub(crate) fn capture(
        metrics: &SequenceMetrics,
        len: usize,
        block_size: usize,
        block_count: usize,
    ) -> Self {
        Self {
            fetch_calls: metrics.fetch_calls,
            fetch_out_of_range: metrics.fetch_out_of_range,
            shifted_slots: metrics.shifted_slots,
            cascade_steps: metrics.cascade_steps,
            resets: metrics.resets,
            peek_calls: metrics.peek_calls.get(),
            peek_out_of_range: metrics.peek_out_of_range.get(),
            len,
            block_size,
            block_count,
        }
    }

    /// Total slot moves across all successful fetches.
    pub fn total_work(&self) -> u64 {
        self.shifted_slots + self.cascade_steps
    }
}
