//! Collision-safe display naming.

use std::collections::HashSet;

/// Extension used when a colliding candidate has none to split on.
pub const DEFAULT_EXTENSION: &str = "csv";

/// Resolve a candidate display name against the names already in use.
///
/// A free candidate is returned unchanged. Otherwise the candidate is
/// split into base and extension on its last dot (a dotless candidate
/// falls back to base `file` and the default extension) and `base_1.ext`,
/// `base_2.ext`, … are tried until a free name is found. Deterministic,
/// and terminates because `existing` is finite.
pub fn resolve_unique(candidate: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }

    let (base, extension) = match candidate.rfind('.') {
        Some(dot) => (&candidate[..dot], &candidate[dot + 1..]),
        None => ("file", DEFAULT_EXTENSION),
    };

    let mut counter = 1usize;
    loop {
        let attempt = format!("{}_{}.{}", base, counter, extension);
        if !existing.contains(&attempt) {
            return attempt;
        }
        counter += 1;
    }
}
