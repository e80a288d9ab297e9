//! Candidate extraction from a word source.
//!
//! The loader turns lines into candidate words, excluding the start and
//! end words of the search (they are injected into the engine
//! directly). Output order follows source order. No deduplication is
//! performed beyond the start/end exclusion: a word appearing twice in
//! the source yields two candidates; the pool drops the duplicate when
//! the word is claimed.

use crate::error::LexiconError;
use crate::source::WordSource;

/// A dictionary word eligible to join a ladder search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The literal word; immutable once created.
    pub word: String,
}

impl Candidate {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Extract candidate words from a source.
///
/// An empty `delimiter` means each line is one token; any other value
/// splits each line on that delimiter into multiple tokens. Tokens
/// exactly equal to `start` or `end` are excluded.
///
/// # Errors
///
/// Returns [`LexiconError`] if the source cannot be opened or read.
pub fn load_candidates(
    source: &dyn WordSource,
    start: &str,
    end: &str,
    delimiter: &str,
) -> Result<Vec<Candidate>, LexiconError> {
    let mut candidates = Vec::new();
    for line in source.lines()? {
        if delimiter.is_empty() {
            push_eligible(&mut candidates, &line, start, end);
        } else {
            for token in line.split(delimiter) {
                push_eligible(&mut candidates, token, start, end);
            }
        }
    }
    Ok(candidates)
}

fn push_eligible(candidates: &mut Vec<Candidate>, token: &str, start: &str, end: &str) {
    if token != start && token != end {
        candidates.push(Candidate::new(token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn excludes_start_and_end_words() {
        let source = MemorySource::new(["pest", "post", "fail", "test", "most"]);
        let candidates = load_candidates(&source, "test", "most", "").unwrap();
        assert_eq!(words(&candidates), vec!["pest", "post", "fail"]);
    }

    #[test]
    fn exclusion_depends_on_search_endpoints() {
        let source = MemorySource::new(["pest", "post", "fail", "test", "most"]);
        let candidates = load_candidates(&source, "pest", "post", "").unwrap();
        assert_eq!(words(&candidates), vec!["fail", "test", "most"]);
    }

    #[test]
    fn delimited_line_yields_same_candidates_as_separate_lines() {
        let delimited = MemorySource::new(["pest,post,fail"]);
        let plain = MemorySource::new(["pest", "post", "fail"]);

        let from_delimited = load_candidates(&delimited, "test", "most", ",").unwrap();
        let from_plain = load_candidates(&plain, "test", "most", "").unwrap();
        assert_eq!(from_delimited, from_plain);
    }

    #[test]
    fn delimited_lines_still_exclude_endpoints() {
        let source = MemorySource::new(["pest,test,post", "most,fail"]);
        let candidates = load_candidates(&source, "test", "most", ",").unwrap();
        assert_eq!(words(&candidates), vec!["pest", "post", "fail"]);
    }

    #[test]
    fn duplicate_source_words_are_preserved() {
        // Known source quirk: the loader does not deduplicate. The pool
        // drops duplicates at claim time instead.
        let source = MemorySource::new(["pest", "pest", "post"]);
        let candidates = load_candidates(&source, "test", "most", "").unwrap();
        assert_eq!(words(&candidates), vec!["pest", "pest", "post"]);
    }

    #[test]
    fn empty_delimiter_does_not_split_lines() {
        let source = MemorySource::new(["pest,post"]);
        let candidates = load_candidates(&source, "test", "most", "").unwrap();
        assert_eq!(words(&candidates), vec!["pest,post"]);
    }
}
