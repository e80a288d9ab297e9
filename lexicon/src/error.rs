//! Typed lexicon errors.
//!
//! A word source that cannot be opened or read is a configuration
//! problem, not a search outcome: the error is returned to the caller
//! and the search never starts. Contrast with "no ladder exists", which
//! is a normal result of the engine, not an error.

/// Fatal failure while loading a word source.
///
/// I/O errors are captured as `detail` strings so the enum stays
/// `Clone + PartialEq` for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The source could not be opened at all.
    SourceUnavailable { path: String, detail: String },
    /// A line could not be read mid-stream.
    ReadFailed { detail: String },
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable { path, detail } => {
                write!(f, "word source unavailable at {path}: {detail}")
            }
            Self::ReadFailed { detail } => write!(f, "word source read failed: {detail}"),
        }
    }
}

impl std::error::Error for LexiconError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_and_detail() {
        let err = LexiconError::SourceUnavailable {
            path: "/no/such/file".into(),
            detail: "not found".into(),
        };
        let text = err.to_string();
        assert!(text.contains("/no/such/file"), "missing path in: {text}");
        assert!(text.contains("not found"), "missing detail in: {text}");
    }
}
