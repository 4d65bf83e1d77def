//! # synoverlap
//!
//! Synonym-aware word tuple overlap between two documents.
//!
//! Both documents are normalized and cut into overlapping tuples of N words.
//! Each tuple of the suspected plagiarized document is expanded into every
//! variant obtained by swapping words for their synonyms, and each variant
//! found among the source tuples counts as a match.
//!
//! ## Features
//!
//! - Iterative Cartesian expansion with an optional per-tuple cap
//! - Line and JSON synonym files, with an optional strict mode
//! - Sequential or thread pool matching
//! - A small text analysis pipeline for normalization
//!
//! ```
//! use synoverlap::prelude::*;
//!
//! let dict = SynonymDictionary::from_synonym_groups([["big", "large"]]).unwrap();
//! let detector = PlagiarismDetector::new(dict, MatchConfig::new(2)).unwrap();
//! let report = detector.compare_texts("a big dog", "a large dog").unwrap();
//! assert_eq!(report.percentage, 100.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod detector;
pub mod document;
pub mod error;
pub mod matching;
pub mod tuple;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::word::WordAnalyzer;
    pub use crate::analysis::synonym::{SynonymDictionary, SynonymFormat, TupleExpander};
    pub use crate::detector::PlagiarismDetector;
    pub use crate::document::Document;
    pub use crate::error::{Result, SynOverlapError};
    pub use crate::matching::{MatchConfig, MatchCounter, MatchReport};
    pub use crate::tuple::{Tuple, TupleSequence, TupleSize};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
