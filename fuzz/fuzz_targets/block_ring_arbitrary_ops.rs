#![no_main]

use libfuzzer_sys::fuzz_target;
use mrukit::ds::BlockRing;
use std::collections::VecDeque;

// Fuzz arbitrary operation sequences on BlockRing
//
// Mirrors rotate_front / shift_toward_removed / refill on a VecDeque and
// checks logical content and cursor placement after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 64) + 1;
    let mut ring = BlockRing::new(1, capacity);
    let mut model: VecDeque<usize> = (1..=capacity).collect();
    let mut next_value = capacity + 1;

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 3;
        let arg = usize::from(data[idx + 1]);

        match op {
            0 => {
                // rotate front, refill back
                let front = ring.rotate_front();
                assert_eq!(Some(front), model.pop_front());
                ring.set_back(next_value);
                model.push_back(next_value);
                next_value += 1;
            },
            1 => {
                // remove an interior offset, refill back
                let offset = arg % capacity;
                let slot = ring.physical_slot(offset);
                let moved = ring.shift_toward_removed(slot);
                assert_eq!(moved, capacity - 1 - offset);
                model.remove(offset);
                ring.set_back(next_value);
                model.push_back(next_value);
                next_value += 1;
            },
            2 => {
                if arg % 8 == 0 {
                    ring.refill(arg);
                    model = (arg..arg + capacity).collect();
                }
            },
            _ => unreachable!(),
        }

        assert!(ring.iter().eq(model.iter().copied()));
        assert_eq!(ring.end(), (ring.start() + capacity - 1) % capacity);
        idx += 2;
    }
});
