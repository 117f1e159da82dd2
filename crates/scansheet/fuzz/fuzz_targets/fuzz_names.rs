//! Fuzz target for collision-safe name resolution.
//!
//! Verifies that resolution terminates and never returns a name already
//! in use, whatever the candidate and existing set look like.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use scansheet::catalog::resolve_unique;

fuzz_target!(|input: (String, Vec<String>)| {
    let (candidate, existing) = input;

    // Keep the set small enough that the suffix search stays cheap
    if candidate.len() > 256 || existing.len() > 64 {
        return;
    }

    let existing: HashSet<String> = existing.into_iter().collect();
    let resolved = resolve_unique(&candidate, &existing);

    assert!(!existing.contains(&resolved));
});
