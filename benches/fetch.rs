use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mrukit::linear::LinearSequence;
use mrukit::sequence::BlockedSequence;
use mrukit::traits::MoveToBack;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 4] = [1_024, 16_384, 262_144, 1_048_576];
const OPS: usize = 1_024;

fn random_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..OPS).map(|_| rng.random_range(1..=n)).collect()
}

fn run<S: MoveToBack>(seq: &mut S, indices: &[usize]) {
    for &index in indices {
        let _ = std::hint::black_box(seq.fetch(std::hint::black_box(index)));
    }
}

fn bench_fetch_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_random");
    for n in SIZES {
        let indices = random_indices(n, 42);
        group.bench_with_input(BenchmarkId::new("blocked", n), &indices, |b, indices| {
            b.iter_batched(
                || BlockedSequence::new(n),
                |mut seq| run(&mut seq, indices),
                BatchSize::LargeInput,
            )
        });
        // The flat baseline gets too slow to be useful past this size.
        if n <= 262_144 {
            group.bench_with_input(BenchmarkId::new("linear", n), &indices, |b, indices| {
                b.iter_batched(
                    || LinearSequence::new(n),
                    |mut seq| run(&mut seq, indices),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_fetch_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_front");
    for n in SIZES {
        group.bench_function(BenchmarkId::new("blocked", n), |b| {
            b.iter_batched(
                || BlockedSequence::new(n),
                |mut seq| {
                    for _ in 0..OPS {
                        let _ = std::hint::black_box(seq.fetch(1));
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let n = 262_144;
    let seq = BlockedSequence::new(n);
    let indices = random_indices(n, 7);
    c.bench_function("peek_random_262144", |b| {
        b.iter(|| {
            for &index in &indices {
                let _ = std::hint::black_box(seq.peek(std::hint::black_box(index)));
            }
        })
    });
}

criterion_group!(benches, bench_fetch_random, bench_fetch_front, bench_peek);
criterion_main!(benches);
