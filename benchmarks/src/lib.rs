//! Benchmark support: synthetic dictionary generation.
//!
//! The generator builds dense one-letter-edit neighborhoods so the
//! frontier and pool actually work for their living, rather than
//! degenerating to a linear chain.

/// Generate a deterministic dictionary of `len`-letter words over a
/// small alphabet. Every combination of the first `letters` alphabet
/// letters at each position is emitted, so the edit graph is richly
/// connected.
#[must_use]
pub fn synthetic_dictionary(len: usize, letters: usize) -> Vec<String> {
    assert!((1..=26).contains(&letters), "letters must be 1..=26");
    let alphabet: Vec<char> = ('a'..='z').take(letters).collect();
    let mut words = vec![String::new()];
    for _ in 0..len {
        let mut next = Vec::with_capacity(words.len() * letters);
        for word in &words {
            for &c in &alphabet {
                let mut w = word.clone();
                w.push(c);
                next.push(w);
            }
        }
        words = next;
    }
    words
}
