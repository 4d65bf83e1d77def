//! High-level entry point tying analysis, synonyms and matching together.
//!
//! # Examples
//!
//! ```
//! use synoverlap::analysis::synonym::SynonymDictionary;
//! use synoverlap::detector::PlagiarismDetector;
//! use synoverlap::matching::MatchConfig;
//!
//! let dict = SynonymDictionary::from_synonym_groups([["jog", "run", "sprint"]]).unwrap();
//! let detector = PlagiarismDetector::new(dict, MatchConfig::new(3)).unwrap();
//!
//! let report = detector
//!     .compare_texts("go for a jog", "go for a run")
//!     .unwrap();
//! assert_eq!(report.match_count, 2);
//! assert_eq!(report.percentage, 100.0);
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::synonym::dictionary::SynonymDictionary;
use crate::document::Document;
use crate::error::Result;
use crate::matching::config::MatchConfig;
use crate::matching::counter::{MatchCounter, MatchReport};
use crate::tuple::{TupleSequence, TupleSize};

/// Compares documents for synonym-aware tuple overlap.
pub struct PlagiarismDetector {
    config: MatchConfig,
    tuple_size: TupleSize,
    analyzer: Arc<dyn Analyzer>,
    counter: MatchCounter,
}

impl PlagiarismDetector {
    /// Create a detector. The config is validated before anything else.
    pub fn new(dictionary: SynonymDictionary, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let tuple_size = config.tuple_size()?;
        let counter = MatchCounter::with_config(Arc::new(dictionary), &config)?;

        Ok(Self {
            config,
            tuple_size,
            analyzer: Arc::new(WordAnalyzer::new()),
            counter,
        })
    }

    /// Load the synonym file at `synonyms` using the format and strictness
    /// from `config`, then create a detector.
    pub fn from_config<P: AsRef<Path>>(config: MatchConfig, synonyms: P) -> Result<Self> {
        config.validate()?;
        let dictionary = SynonymDictionary::load_from_file(
            synonyms,
            config.synonym_format,
            config.strict_synonyms,
        )?;
        Self::new(dictionary, config)
    }

    /// Replace the analyzer used for documents.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The synonym dictionary.
    pub fn dictionary(&self) -> &SynonymDictionary {
        self.counter.dictionary()
    }

    /// Analyze text and window it into tuples.
    pub fn tuples_from_text(&self, text: &str) -> Result<TupleSequence> {
        Ok(Document::from_text(text, self.analyzer.as_ref())?.tuples(self.tuple_size))
    }

    /// Read a file, analyze it and window it into tuples.
    pub fn tuples_from_file<P: AsRef<Path>>(&self, path: P) -> Result<TupleSequence> {
        Ok(Document::load_from_file(path, self.analyzer.as_ref())?.tuples(self.tuple_size))
    }

    /// Compare two in-memory texts.
    pub fn compare_texts(&self, plagiarized: &str, source: &str) -> Result<MatchReport> {
        let plagiarized = self.tuples_from_text(plagiarized)?;
        let source = self.tuples_from_text(source)?;
        self.counter.count_matches(&plagiarized, &source)
    }

    /// Compare two files. Both are read before matching starts.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        plagiarized: P,
        source: Q,
    ) -> Result<MatchReport> {
        let plagiarized = self.tuples_from_file(plagiarized)?;
        let source = self.tuples_from_file(source)?;
        self.counter.count_matches(&plagiarized, &source)
    }
}

impl std::fmt::Debug for PlagiarismDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlagiarismDetector")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("counter", &self.counter)
            .finish()
    }
}
