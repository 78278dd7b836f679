//! Example demonstrating the blocked move-to-back sequence.
//!
//! `fetch(k)` returns the value at position `k` and makes it the most recently
//! used (moves it to the back). Everything after position `k` slides forward.
//!
//! Run with: cargo run --example basic_sequence

use mrukit::error::SequenceError;
use mrukit::sequence::BlockedSequence;

fn main() -> Result<(), SequenceError> {
    println!("=== Blocked Sequence Example ===\n");

    let mut seq = BlockedSequence::try_new(8)?;
    println!(
        "Created sequence: len={}, block_size={}, block_count={}",
        seq.len(),
        seq.block_size(),
        seq.block_count()
    );
    println!("  order: {:?}\n", seq.to_vec());

    let v = seq.fetch(5)?;
    println!("fetch(5) -> {v}");
    println!("  order: {:?}", seq.to_vec());

    let v = seq.fetch(6)?;
    println!("fetch(6) -> {v}");
    println!("  order: {:?}", seq.to_vec());

    // The back is always the most recent fetch
    println!("\npeek(8) -> {} (last fetched value)", seq.peek(8)?);

    // Fetching the back leaves the order unchanged
    let v = seq.fetch(8)?;
    println!("fetch(8) -> {v}");
    println!("  order: {:?}", seq.to_vec());

    println!("\n=== Block Layout ===\n");
    for (i, block) in seq.blocks().iter().enumerate() {
        println!(
            "  block {i}: {:?} (start={}, end={})",
            block.iter().collect::<Vec<_>>(),
            block.start(),
            block.end()
        );
    }

    println!("\n=== Errors ===\n");
    match seq.fetch(0) {
        Ok(v) => println!("fetch(0) -> {v}"),
        Err(e) => println!("fetch(0) failed: {e}"),
    }
    match seq.fetch(9) {
        Ok(v) => println!("fetch(9) -> {v}"),
        Err(e) => println!("fetch(9) failed: {e}"),
    }
    match BlockedSequence::try_new(0) {
        Ok(_) => println!("try_new(0) succeeded"),
        Err(e) => println!("try_new(0) failed: {e}"),
    }

    seq.reset();
    println!("\nAfter reset: {:?}", seq.to_vec());

    Ok(())
}

// Expected output:
// === Blocked Sequence Example ===
//
// Created sequence: len=8, block_size=3, block_count=3
//   order: [1, 2, 3, 4, 5, 6, 7, 8]
//
// fetch(5) -> 5
//   order: [1, 2, 3, 4, 6, 7, 8, 5]
// fetch(6) -> 7
//   order: [1, 2, 3, 4, 6, 8, 5, 7]
//
// peek(8) -> 7 (last fetched value)
// fetch(8) -> 7
//   order: [1, 2, 3, 4, 6, 8, 5, 7]
//
// === Block Layout ===
//
//   block 0: [1, 2, 3] (start=0, end=2)
//   block 1: [4, 6, 8] (start=0, end=2)
//   block 2: [5, 7] (start=0, end=1)
//
// === Errors ===
//
// fetch(0) failed: index 0 is out of range 1..=8
// fetch(9) failed: index 9 is out of range 1..=8
// try_new(0) failed: upper limit must be a positive integer, got 0
//
// After reset: [1, 2, 3, 4, 5, 6, 7, 8]
