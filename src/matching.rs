//! Synonym-aware matching of tuple sequences.
//!
//! - [`config`] - Matching settings and their validation
//! - [`counter`] - The match counter and its report
//!
//! # Examples
//!
//! ```
//! use synoverlap::analysis::synonym::SynonymDictionary;
//! use synoverlap::matching::count_matches;
//! use synoverlap::tuple::{Tuple, TupleSequence};
//!
//! let dict = SynonymDictionary::from_synonym_groups([["big", "large"]]).unwrap();
//! let plagiarized: TupleSequence = [Tuple::new(["big", "dog"])].into_iter().collect();
//! let source: TupleSequence = [Tuple::new(["large", "dog"])].into_iter().collect();
//!
//! let report = count_matches(&plagiarized, &source, &dict).unwrap();
//! assert_eq!(report.match_count, 1);
//! assert_eq!(report.percentage, 100.0);
//! ```

use std::sync::Arc;

pub mod config;
pub mod counter;

pub use config::MatchConfig;
pub use counter::{MatchCounter, MatchReport};

use crate::analysis::synonym::dictionary::SynonymDictionary;
use crate::error::Result;
use crate::tuple::TupleSequence;

/// Count matches sequentially with no variant cap.
pub fn count_matches(
    plagiarized: &TupleSequence,
    source: &TupleSequence,
    dictionary: &SynonymDictionary,
) -> Result<MatchReport> {
    MatchCounter::new(Arc::new(dictionary.clone())).count_matches(plagiarized, source)
}
