//! Letter-mismatch heuristic.

/// Count of byte positions where two equal-length words differ.
///
/// This is the A* heuristic for the one-letter-edit metric. It is
/// admissible (each step fixes at most one mismatched position, so it
/// never overestimates the remaining steps) and consistent (adjacent
/// words change the count by at most one), so a node closed once never
/// needs to be reopened.
///
/// Both words must have the same byte length; comparison is byte-wise,
/// matching the ASCII dictionaries the engine is built for.
#[must_use]
pub fn mismatch_count(a: &str, b: &str) -> u32 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "mismatch_count requires equal-length words"
    );
    #[allow(clippy::cast_possible_truncation)]
    let count = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() as u32;
    count
}
