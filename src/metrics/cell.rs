use std::cell::Cell;

/// A counter that can be bumped through `&self`.
///
/// Used for read-path counters (`peek`) recorded from shared borrows. Holding
/// one makes the owning type `!Sync`, which is fine for a structure that is
/// never shared across threads without an external lock.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

impl Clone for MetricsCell {
    fn clone(&self) -> Self {
        Self(Cell::new(self.get()))
    }
}
