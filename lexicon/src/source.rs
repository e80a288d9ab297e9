//! Word source trait and implementations.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::error::LexiconError;

/// A collaborator that produces an ordered sequence of text lines.
///
/// # Contract
///
/// - Lines are yielded in source order, without trailing newlines.
/// - Failure to open or read the underlying source is fatal: it is
///   returned as a [`LexiconError`], never recovered internally.
/// - The source is fully consumed within one call; implementations do
///   not hold state across calls.
pub trait WordSource {
    /// Produce every line of the source, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the source cannot be opened or a
    /// line cannot be read.
    fn lines(&self) -> Result<Vec<String>, LexiconError>;
}

/// Line-oriented text file source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path. The file is not touched
    /// until [`WordSource::lines`] is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn lines(&self) -> Result<Vec<String>, LexiconError> {
        let file = File::open(&self.path).map_err(|e| LexiconError::SourceUnavailable {
            path: self.path.display().to_string(),
            detail: e.to_string(),
        })?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| LexiconError::ReadFailed {
                detail: e.to_string(),
            })?;
            lines.push(line);
        }
        Ok(lines)
    }
}

/// In-memory source, for tests and embedded dictionaries.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    /// Create a source from a sequence of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for MemorySource {
    fn lines(&self) -> Result<Vec<String>, LexiconError> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn memory_source_yields_lines_in_order() {
        let source = MemorySource::new(["pest", "post", "fail"]);
        assert_eq!(source.lines().unwrap(), vec!["pest", "post", "fail"]);
    }

    #[test]
    fn file_source_reads_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "pest").unwrap();
        writeln!(file, "post").unwrap();
        writeln!(file, "fail").unwrap();
        drop(file);

        let source = FileSource::new(&path);
        assert_eq!(source.lines().unwrap(), vec!["pest", "post", "fail"]);
    }

    #[test]
    fn file_source_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = FileSource::new(&path).lines().unwrap_err();
        assert!(
            matches!(err, LexiconError::SourceUnavailable { .. }),
            "expected SourceUnavailable, got {err:?}"
        );
    }
}
