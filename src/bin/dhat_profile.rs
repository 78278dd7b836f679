//! DHAT heap profiler for mrukit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Besides writing the profile, checks that fetch workloads perform no heap
//! allocation once a sequence has been built.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use mrukit::linear::LinearSequence;
use mrukit::sequence::BlockedSequence;
use mrukit::traits::MoveToBack;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize + 1
    }
}

/// Uniform random positions.
fn uniform_workload<S: MoveToBack>(seq: &mut S, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let len = seq.len();
    for _ in 0..operations {
        let _ = seq.fetch(rng.next_index(len));
    }
}

/// Always the least-recent position: worst case for the cascade.
fn front_workload<S: MoveToBack>(seq: &mut S, operations: usize) {
    for _ in 0..operations {
        let _ = seq.fetch(1);
    }
}

/// Positions near the back: mostly intra-block shifts.
fn tail_workload<S: MoveToBack>(seq: &mut S, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let len = seq.len();
    let window = len.min(16);
    for _ in 0..operations {
        let _ = seq.fetch(len + 1 - rng.next_index(window));
    }
}

/// Runs `work` and returns how many heap blocks it allocated.
fn allocations_during(work: impl FnOnce()) -> u64 {
    let before = dhat::HeapStats::get().total_blocks;
    work();
    dhat::HeapStats::get().total_blocks - before
}

fn profile<S: MoveToBack>(label: &str, seq: &mut S, operations: usize) {
    println!("=== Profiling {label} ===");
    let allocated = allocations_during(|| {
        uniform_workload(seq, operations, 42);
        front_workload(seq, operations / 2);
        tail_workload(seq, operations / 2, 7);
    });
    println!("  len: {}", seq.len());
    println!("  allocations during fetch workloads: {allocated}");
    assert_eq!(allocated, 0, "{label}: fetch must not allocate");
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("mrukit DHAT Heap Profiling");
    println!("==========================\n");

    let upper_limit = 1 << 18;
    let mut blocked = BlockedSequence::new(upper_limit);
    profile("BlockedSequence", &mut blocked, 200_000);
    if let Err(err) = blocked.check_invariants() {
        panic!("BlockedSequence invariants broken: {err}");
    }

    let mut linear = LinearSequence::new(upper_limit);
    profile("LinearSequence", &mut linear, 2_000);

    println!("\n==========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
