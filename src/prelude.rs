pub use crate::ds::BlockRing;
pub use crate::error::{InvariantError, SequenceError};
pub use crate::linear::LinearSequence;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::SequenceMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::sequence::BlockedSequence;
pub use crate::traits::MoveToBack;
