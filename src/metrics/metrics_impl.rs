use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{SequenceMetricsReadRecorder, SequenceMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct SequenceMetrics {
    pub fetch_calls: u64,
    pub fetch_out_of_range: u64,
    pub shifted_slots: u64,
    pub cascade_steps: u64,
    pub resets: u64,

    pub peek_calls: MetricsCell,
    pub peek_out_of_range: MetricsCell,
}

impl SequenceMetricsRecorder for SequenceMetrics {
    fn record_fetch(&mut self, shifted_slots: u64, cascade_steps: u64) {
        self.fetch_calls += 1;
        self.shifted_slots += shifted_slots;
        self.cascade_steps += cascade_steps;
    }
    fn record_fetch_out_of_range(&mut self) {
        self.fetch_calls += 1;
        self.fetch_out_of_range += 1;
    }
    fn record_reset(&mut self) {
        self.resets += 1;
    }
}

impl SequenceMetricsReadRecorder for SequenceMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }
    fn record_peek_out_of_range(&self) {
        self.peek_calls.incr();
        self.peek_out_of_range.incr();
    }
}
