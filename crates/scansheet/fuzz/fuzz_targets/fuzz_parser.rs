//! Fuzz target for the delimited parser.
//!
//! This fuzzer tests that the parser:
//! 1. Never panics on malformed input
//! 2. Either errors or returns a rectangular grid
//! 3. Handles all delimiter combinations

#![no_main]

use libfuzzer_sys::fuzz_target;
use scansheet::Parser;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    if let Ok(grid) = parser.parse_bytes(data) {
        // An accepted grid must be rectangular with a non-empty header
        let width = grid[0].len();
        assert!(width > 0);
        assert!(grid.iter().all(|row| row.len() == width));
    }
});
