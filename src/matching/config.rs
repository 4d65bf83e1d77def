//! Configuration for tuple matching.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::dictionary::SynonymFormat;
use crate::error::{Result, SynOverlapError};
use crate::tuple::{DEFAULT_TUPLE_SIZE, TupleSize};

/// Settings shared by the detector, the match counter and the CLI.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs the values it changes:
///
/// ```
/// use synoverlap::matching::MatchConfig;
///
/// let config: MatchConfig = serde_json::from_str(r#"{"tuple_size": 4}"#).unwrap();
/// assert_eq!(config.tuple_size, 4);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of consecutive words per tuple.
    pub tuple_size: usize,

    /// Reject synonym files that put a word in more than one group.
    pub strict_synonyms: bool,

    /// Layout of the synonym file.
    pub synonym_format: SynonymFormat,

    /// Upper bound on variants per plagiarized tuple. `None` means unbounded.
    pub max_variants_per_tuple: Option<usize>,

    /// Spread per-tuple work across a thread pool.
    pub parallel: bool,

    /// Thread pool size for parallel matching.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            strict_synonyms: false,
            synonym_format: SynonymFormat::Lines,
            max_variants_per_tuple: None,
            parallel: false,
            thread_pool_size: None,
        }
    }
}

impl MatchConfig {
    /// Create a config with the given tuple size and defaults elsewhere.
    pub fn new(tuple_size: usize) -> Self {
        Self {
            tuple_size,
            ..Default::default()
        }
    }

    /// Load a config from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: MatchConfig = serde_json::from_str(&content).map_err(|e| {
            SynOverlapError::parse(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set whether repeated words across synonym groups are rejected.
    pub fn with_strict_synonyms(mut self, strict: bool) -> Self {
        self.strict_synonyms = strict;
        self
    }

    /// Set the synonym file layout.
    pub fn with_synonym_format(mut self, format: SynonymFormat) -> Self {
        self.synonym_format = format;
        self
    }

    /// Set the per-tuple variant cap.
    pub fn with_max_variants_per_tuple(mut self, max_variants: Option<usize>) -> Self {
        self.max_variants_per_tuple = max_variants;
        self
    }

    /// Enable or disable parallel matching.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the thread pool size for parallel matching.
    pub fn with_thread_pool_size(mut self, threads: Option<usize>) -> Self {
        self.thread_pool_size = threads;
        self
    }

    /// The validated tuple size.
    pub fn tuple_size(&self) -> Result<TupleSize> {
        TupleSize::new(self.tuple_size)
    }

    /// Check every setting before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.tuple_size()?;
        if self.thread_pool_size == Some(0) {
            return Err(SynOverlapError::configuration(
                "thread pool size must be at least 1",
            ));
        }
        if self.max_variants_per_tuple == Some(0) {
            return Err(SynOverlapError::configuration(
                "max variants per tuple must be at least 1",
            ));
        }
        Ok(())
    }
}
