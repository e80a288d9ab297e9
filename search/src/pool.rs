//! Candidate pool: dictionary words not yet attached to the search tree.

use ladder_lexicon::loader::Candidate;

use crate::heuristic::mismatch_count;

/// Result of one [`CandidatePool::claim_children`] partition step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Words claimed as children, in pool order.
    pub children: Vec<String>,
    /// Words dropped because they were identical to the expanded word.
    pub duplicates_dropped: u64,
}

/// The working set of dictionary words awaiting attachment.
///
/// A word appears in the pool until it is claimed as a child of some
/// expanded node; a claim is permanent, so a word can never be attached
/// to the tree twice. The pool is fully consumed or discarded by the
/// end of a single search invocation.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<String>,
}

impl CandidatePool {
    /// Build the pool from the loader's output, preserving order.
    #[must_use]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            words: candidates.into_iter().map(|c| c.word).collect(),
        }
    }

    /// Inject a word directly (used for the end word, which the loader
    /// excludes so it can be matched as a search target).
    pub fn push_word(&mut self, word: String) {
        self.words.push(word);
    }

    /// Remaining pool size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Partition the pool against an expanded word:
    ///
    /// - same length, exactly one differing position → claimed as a
    ///   child and removed from the pool;
    /// - same length, zero differing positions → removed without
    ///   becoming a child (indistinguishable from the expanded word);
    /// - anything else (two or more differences, or differing length)
    ///   → retained for later expansions.
    pub fn claim_children(&mut self, word: &str) -> Claim {
        let mut children = Vec::new();
        let mut duplicates_dropped = 0u64;
        let mut retained = Vec::with_capacity(self.words.len());

        for candidate in self.words.drain(..) {
            if candidate.len() == word.len() {
                match mismatch_count(&candidate, word) {
                    0 => duplicates_dropped += 1,
                    1 => children.push(candidate),
                    _ => retained.push(candidate),
                }
            } else {
                retained.push(candidate);
            }
        }

        self.words = retained;
        Claim {
            children,
            duplicates_dropped,
        }
    }
}
