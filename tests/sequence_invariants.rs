// ==============================================
// SEQUENCE INVARIANT TESTS (integration)
// ==============================================
//
// Drives BlockedSequence and the LinearSequence reference model with the same
// seeded call streams and checks the laws every move-to-back sequence obeys.

use mrukit::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Runs `ops` random fetches against both sequences, comparing every result.
fn run_against_reference(n: usize, ops: usize, seed: u64) {
    let mut blocked = BlockedSequence::new(n);
    let mut linear = LinearSequence::new(n);
    let mut rng = SmallRng::seed_from_u64(seed);

    for step in 0..ops {
        let index = rng.random_range(1..=n);
        let got = blocked.fetch(index);
        let expected = linear.fetch(index);
        assert_eq!(got, expected, "n={n} seed={seed} step={step} index={index}");
    }
    assert_eq!(blocked.to_vec(), linear.as_slice(), "n={n} seed={seed}");
    blocked.debug_validate_invariants();
}

mod reference_model {
    use super::*;

    #[test]
    fn small_universes_every_size() {
        for n in 1..=64 {
            run_against_reference(n, 4 * n + 16, n as u64);
        }
    }

    #[test]
    fn perfect_squares_and_neighbours() {
        for root in [2usize, 5, 10, 31] {
            let sq = root * root;
            for n in [sq - 1, sq, sq + 1] {
                run_against_reference(n, 2_000, 0xC0FFEE ^ n as u64);
            }
        }
    }

    #[test]
    fn larger_universe_long_stream() {
        run_against_reference(10_007, 20_000, 7);
    }

    #[test]
    fn skewed_front_and_back_indices() {
        let n = 500;
        let mut blocked = BlockedSequence::new(n);
        let mut linear = LinearSequence::new(n);
        let mut rng = SmallRng::seed_from_u64(99);

        for _ in 0..5_000 {
            let index = if rng.random::<bool>() {
                rng.random_range(1..=5)
            } else {
                rng.random_range(n - 4..=n)
            };
            assert_eq!(blocked.fetch(index), linear.fetch(index));
        }
        assert_eq!(blocked.to_vec(), linear.as_slice());
    }
}

mod laws {
    use super::*;

    #[test]
    fn move_to_back_law() {
        let n = 97;
        let mut seq = BlockedSequence::new(n);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let v = seq.fetch(rng.random_range(1..=n)).unwrap();
            assert_eq!(seq.peek(n), Ok(v));
        }
    }

    #[test]
    fn fetch_last_is_identity_on_order() {
        let n = 40;
        let mut seq = BlockedSequence::new(n);
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..200 {
            seq.fetch(rng.random_range(1..=n)).unwrap();
            let before = seq.to_vec();
            assert_eq!(seq.fetch(n), Ok(before[n - 1]));
            assert_eq!(seq.to_vec(), before);
        }
    }

    #[test]
    fn bijection_after_every_fetch() {
        let n = 123;
        let mut seq = BlockedSequence::new(n);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..2_000 {
            seq.fetch(rng.random_range(1..=n)).unwrap();
            assert!(seq.check_invariants().is_ok());
        }
    }

    #[test]
    fn end_to_end_example() {
        let mut seq = BlockedSequence::new(8);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(seq.fetch(5), Ok(5));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 7, 8, 5]);
        assert_eq!(seq.fetch(6), Ok(7));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 6, 8, 5, 7]);
    }
}

mod errors {
    use super::*;

    #[test]
    fn zero_sized_universe_is_a_construction_error() {
        assert_eq!(
            BlockedSequence::try_new(0).unwrap_err(),
            SequenceError::InvalidConstructionSize { upper_limit: 0 }
        );
        assert_eq!(
            LinearSequence::try_new(0).unwrap_err(),
            SequenceError::InvalidConstructionSize { upper_limit: 0 }
        );
    }

    #[test]
    fn zero_and_past_end_are_out_of_range() {
        for n in [1usize, 2, 8, 100] {
            let mut seq = BlockedSequence::new(n);
            assert_eq!(
                seq.fetch(0),
                Err(SequenceError::IndexOutOfRange { index: 0, len: n })
            );
            assert_eq!(
                seq.fetch(n + 1),
                Err(SequenceError::IndexOutOfRange { index: n + 1, len: n })
            );
            assert_eq!(seq.to_vec(), (1..=n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn batch_stops_at_first_bad_index() {
        let mut seq = BlockedSequence::new(5);
        let err = MoveToBack::fetch_batch(&mut seq, &[1, 9, 1]);
        assert!(err.unwrap_err().is_out_of_range());
        // Only the first fetch was applied.
        assert_eq!(seq.to_vec(), vec![2, 3, 4, 5, 1]);
    }
}

mod single_element {
    use super::*;

    #[test]
    fn fetch_one_never_changes_state() {
        let mut seq = BlockedSequence::new(1);
        assert_eq!(seq.block_size(), 1);
        assert_eq!(seq.block_count(), 1);
        for _ in 0..10 {
            assert_eq!(seq.fetch(1), Ok(1));
        }
        assert_eq!(seq.to_vec(), vec![1]);
        assert!(seq.fetch(2).is_err());
    }
}
