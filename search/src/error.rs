//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime
//! terminations (goal reached, frontier exhausted, budget exceeded)
//! are expressed via [`crate::trace::TerminationReasonV1`] and always
//! produce a [`crate::trace::LadderTraceV1`]. "No ladder exists" is a
//! normal outcome, never an error.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any search step is taken; no trace
/// is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and end words have different lengths. One-letter edges
    /// never match across lengths, so the search could only ever
    /// exhaust the pool; reject the input up front instead.
    LengthMismatch { start_len: usize, end_len: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { start_len, end_len } => write!(
                f,
                "start and end words must have equal length (got {start_len} and {end_len})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_lengths() {
        let err = SearchError::LengthMismatch {
            start_len: 4,
            end_len: 5,
        };
        let text = err.to_string();
        assert!(text.contains('4') && text.contains('5'), "got: {text}");
    }
}
