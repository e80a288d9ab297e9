//! Top-level entry point: load a lexicon, then run the ladder search.

use ladder_lexicon::error::LexiconError;
use ladder_lexicon::loader::load_candidates;
use ladder_lexicon::source::WordSource;

use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::search::{search, SearchOutcome};

/// Error running a ladder search end to end.
///
/// Distinguishes the fatal configuration class (the dictionary could
/// not be loaded) from pre-flight input validation. The expected
/// negative result — no ladder exists — is NOT an error; it is a
/// successful [`SearchOutcome`] with `found() == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The word source could not be opened or read.
    Load(LexiconError),
    /// The search inputs failed pre-flight validation.
    Search(SearchError),
}

impl std::fmt::Display for LadderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "lexicon load failed: {e}"),
            Self::Search(e) => write!(f, "search rejected inputs: {e}"),
        }
    }
}

impl std::error::Error for LadderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<LexiconError> for LadderError {
    fn from(e: LexiconError) -> Self {
        Self::Load(e)
    }
}

impl From<SearchError> for LadderError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Find the shortest one-letter-at-a-time transformation between two
/// equal-length words, using `source` as the dictionary.
///
/// An empty `delimiter` means each source line is one candidate word;
/// any other value splits each line on that delimiter. The returned
/// path is ordered from the end word back to the start word, both
/// inclusive, and is empty when `found()` is `false`.
///
/// # Errors
///
/// - [`LadderError::Load`] if the word source cannot be opened or read
///   (fatal configuration error; the search does not start).
/// - [`LadderError::Search`] if the start and end words have different
///   lengths.
pub fn find_shortest_ladder(
    start: &str,
    end: &str,
    source: &dyn WordSource,
    delimiter: &str,
) -> Result<SearchOutcome, LadderError> {
    let candidates = load_candidates(source, start, end, delimiter)?;
    let outcome = search(start, end, candidates, &SearchPolicy::default())?;
    Ok(outcome)
}
