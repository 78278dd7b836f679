#![no_main]

use libfuzzer_sys::fuzz_target;
use mrukit::linear::LinearSequence;
use mrukit::sequence::BlockedSequence;

// Fuzz arbitrary operation sequences on BlockedSequence
//
// Replays fetch, peek, out-of-range and reset operations against the
// LinearSequence model and checks results and structure after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First two bytes pick the universe size (1..=4096)
    let n = (usize::from(u16::from_le_bytes([data[0], data[1]])) % 4096) + 1;
    let mut blocked = BlockedSequence::new(n);
    let mut linear = LinearSequence::new(n);

    let ops = &data[2..];
    let mut idx = 0;
    while idx + 2 < ops.len() {
        let op = ops[idx] % 5;
        let raw = usize::from(u16::from_le_bytes([ops[idx + 1], ops[idx + 2]]));
        let index = raw % n + 1;

        match op {
            0 | 1 => {
                // fetch
                assert_eq!(blocked.fetch(index), linear.fetch(index));
                assert_eq!(blocked.peek(n), linear.peek(n));
            },
            2 => {
                // peek
                assert_eq!(blocked.peek(index), linear.peek(index));
            },
            3 => {
                // out of range must not mutate
                let before = blocked.to_vec();
                let bad = if raw % 2 == 0 { 0 } else { n + 1 + raw };
                assert!(blocked.fetch(bad).is_err());
                assert_eq!(blocked.to_vec(), before);
            },
            4 => {
                if raw % 16 == 0 {
                    blocked.reset();
                    linear.reset();
                }
            },
            _ => unreachable!(),
        }

        idx += 3;
    }

    assert_eq!(blocked.to_vec(), linear.as_slice());
    assert!(blocked.check_invariants().is_ok());
});
