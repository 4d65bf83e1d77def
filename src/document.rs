//! Documents as normalized word streams.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, SynOverlapError};
use crate::tuple::{TupleSequence, TupleSize};

/// A document reduced to its normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    words: Vec<String>,
}

impl Document {
    /// Analyze in-memory text.
    pub fn from_text(text: &str, analyzer: &dyn Analyzer) -> Result<Self> {
        Ok(Self {
            path: None,
            words: analyzer.words(text)?,
        })
    }

    /// Read and analyze a UTF-8 text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, analyzer: &dyn Analyzer) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            SynOverlapError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read document '{}': {}", path.display(), e),
            ))
        })?;

        let words = analyzer.words(&text)?;
        log::debug!("read {} words from {}", words.len(), path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            words,
        })
    }

    /// Where the document was read from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The normalized words, in document order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of normalized words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// All windows of `size` words. Empty when the document is shorter.
    pub fn tuples(&self, size: TupleSize) -> TupleSequence {
        TupleSequence::from_words(&self.words, size)
    }
}
