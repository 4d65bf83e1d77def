//! Counting synonym-aware tuple matches between two documents.
//!
//! For every tuple of the plagiarized document, each synonym variant is looked
//! up in the set of source tuples, and every variant found adds one to the
//! match count. A single plagiarized tuple can therefore contribute several
//! matches, and the percentage can exceed 100%:
//!
//! ```text
//! synonyms:    jog run sprint
//! plagiarized: (jog)
//! source:      (run) (sprint)
//! matches:     2  →  200%
//! ```
//!
//! The report also carries `matched_tuples`, the number of plagiarized tuples
//! with at least one variant in the source, for callers that want a ratio
//! capped at 100%.

use std::sync::Arc;
use std::time::Instant;

use ahash::AHashSet;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::dictionary::SynonymDictionary;
use crate::analysis::synonym::expander::TupleExpander;
use crate::error::{Result, SynOverlapError};
use crate::matching::config::MatchConfig;
use crate::tuple::{Tuple, TupleSequence};

/// Outcome of comparing a plagiarized sequence against a source sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// One per (plagiarized tuple, variant found in source) pair.
    pub match_count: usize,

    /// Number of tuples in the plagiarized sequence.
    pub total_tuples: usize,

    /// Plagiarized tuples with at least one variant found in source.
    pub matched_tuples: usize,

    /// `100 * match_count / total_tuples`. May exceed 100.
    pub percentage: f64,

    /// `100 * matched_tuples / total_tuples`. Never exceeds 100.
    pub matched_tuple_percentage: f64,

    /// Variants generated and looked up across all tuples.
    pub variants_tested: u64,
}

/// Partial counts for a slice of plagiarized tuples. Merging is associative
/// and commutative, so workers can reduce in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PartialCount {
    matches: usize,
    matched_tuples: usize,
    variants: u64,
}

impl PartialCount {
    fn merge(self, other: PartialCount) -> PartialCount {
        PartialCount {
            matches: self.matches + other.matches,
            matched_tuples: self.matched_tuples + other.matched_tuples,
            variants: self.variants + other.variants,
        }
    }
}

/// Drives expansion and lookup over whole tuple sequences.
pub struct MatchCounter {
    dictionary: Arc<SynonymDictionary>,
    max_variants: Option<usize>,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl MatchCounter {
    /// Create a sequential counter with no variant cap.
    pub fn new(dictionary: Arc<SynonymDictionary>) -> Self {
        Self {
            dictionary,
            max_variants: None,
            thread_pool: None,
        }
    }

    /// Create a counter from a validated config. Builds a thread pool when
    /// `config.parallel` is set.
    pub fn with_config(dictionary: Arc<SynonymDictionary>, config: &MatchConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
            let pool = ThreadPoolBuilder::new()
                .num_threads(thread_pool_size)
                .thread_name(|i| format!("synoverlap-match-{i}"))
                .build()
                .map_err(|e| anyhow::anyhow!("Failed to create thread pool: {e}"))?;
            log::debug!("matching with {thread_pool_size} threads");
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Self {
            dictionary,
            max_variants: config.max_variants_per_tuple,
            thread_pool,
        })
    }

    /// The synonym dictionary used for expansion.
    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    /// Whether this counter runs on a thread pool.
    pub fn is_parallel(&self) -> bool {
        self.thread_pool.is_some()
    }

    /// Count synonym-aware matches of `plagiarized` against `source`.
    ///
    /// Fails with [`SynOverlapError::InvalidInput`] when `plagiarized` is
    /// empty, since no ratio can be computed, and with
    /// [`SynOverlapError::ResourceExhausted`] when a tuple exceeds the variant
    /// cap. No partial result is returned on failure.
    pub fn count_matches(
        &self,
        plagiarized: &TupleSequence,
        source: &TupleSequence,
    ) -> Result<MatchReport> {
        if plagiarized.is_empty() {
            return Err(SynOverlapError::invalid_input(
                "plagiarized document has no tuples (it is shorter than the tuple size)",
            ));
        }

        let start = Instant::now();
        let source_set: AHashSet<Vec<&str>> = source
            .iter()
            .map(|tuple| tuple.words().iter().map(String::as_str).collect())
            .collect();

        let expander = TupleExpander::new(&self.dictionary).with_max_variants(self.max_variants);
        let score = |tuple: &Tuple| -> Result<PartialCount> {
            let mut matches = 0usize;
            let variants = expander.for_each_variant(tuple, |variant| {
                if source_set.contains(variant) {
                    matches += 1;
                }
            })?;
            Ok(PartialCount {
                matches,
                matched_tuples: usize::from(matches > 0),
                variants: variants as u64,
            })
        };

        let total = match &self.thread_pool {
            Some(pool) => pool.install(|| {
                plagiarized
                    .as_slice()
                    .par_iter()
                    .map(score)
                    .try_reduce(PartialCount::default, |a, b| Ok(a.merge(b)))
            })?,
            None => plagiarized
                .iter()
                .map(score)
                .try_fold(PartialCount::default(), |acc, part| {
                    part.map(|part| acc.merge(part))
                })?,
        };

        let total_tuples = plagiarized.len();
        let report = MatchReport {
            match_count: total.matches,
            total_tuples,
            matched_tuples: total.matched_tuples,
            percentage: 100.0 * total.matches as f64 / total_tuples as f64,
            matched_tuple_percentage: 100.0 * total.matched_tuples as f64 / total_tuples as f64,
            variants_tested: total.variants,
        };

        log::info!(
            "{} matches over {} tuples ({} distinct source tuples, {} variants) in {:?}",
            report.match_count,
            total_tuples,
            source_set.len(),
            report.variants_tested,
            start.elapsed()
        );

        Ok(report)
    }
}

impl std::fmt::Debug for MatchCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchCounter")
            .field("dictionary_words", &self.dictionary.len())
            .field("max_variants", &self.max_variants)
            .field("parallel", &self.is_parallel())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(groups: &[&[&str]]) -> Arc<SynonymDictionary> {
        Arc::new(
            SynonymDictionary::from_synonym_groups(groups.iter().map(|g| g.iter().copied()))
                .unwrap(),
        )
    }

    fn sequence(tuples: &[&[&str]]) -> TupleSequence {
        tuples.iter().map(|t| Tuple::new(t.iter().copied())).collect()
    }

    #[test]
    fn test_every_matching_variant_counts() {
        let counter = MatchCounter::new(dictionary(&[&["jog", "run", "sprint"]]));
        let report = counter
            .count_matches(&sequence(&[&["jog"]]), &sequence(&[&["run"], &["sprint"]]))
            .unwrap();

        assert_eq!(report.match_count, 2);
        assert_eq!(report.matched_tuples, 1);
        assert_eq!(report.percentage, 200.0);
        assert_eq!(report.matched_tuple_percentage, 100.0);
        assert_eq!(report.variants_tested, 3);
    }

    #[test]
    fn test_duplicate_source_tuples_count_once() {
        let counter = MatchCounter::new(dictionary(&[]));
        let report = counter
            .count_matches(
                &sequence(&[&["a", "b"]]),
                &sequence(&[&["a", "b"], &["a", "b"], &["a", "b"]]),
            )
            .unwrap();
        assert_eq!(report.match_count, 1);
    }

    #[test]
    fn test_repeated_plagiarized_tuples_count_each_time() {
        let counter = MatchCounter::new(dictionary(&[]));
        let report = counter
            .count_matches(&sequence(&[&["x"], &["x"], &["y"]]), &sequence(&[&["x"]]))
            .unwrap();
        assert_eq!(report.match_count, 2);
        assert_eq!(report.total_tuples, 3);
    }

    #[test]
    fn test_empty_plagiarized_is_invalid_input() {
        let counter = MatchCounter::new(dictionary(&[]));
        let err = counter
            .count_matches(&TupleSequence::default(), &sequence(&[&["a"]]))
            .unwrap_err();
        assert!(matches!(err, SynOverlapError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_source_gives_zero() {
        let counter = MatchCounter::new(dictionary(&[]));
        let report = counter
            .count_matches(&sequence(&[&["a"]]), &TupleSequence::default())
            .unwrap();
        assert_eq!(report.match_count, 0);
        assert_eq!(report.percentage, 0.0);
    }

    #[test]
    fn test_variant_cap_aborts_without_partial_result() {
        let config = MatchConfig::new(1).with_max_variants_per_tuple(Some(2));
        let counter =
            MatchCounter::with_config(dictionary(&[&["jog", "run", "sprint"]]), &config).unwrap();
        let err = counter
            .count_matches(&sequence(&[&["jog"]]), &sequence(&[&["run"]]))
            .unwrap_err();
        assert!(matches!(err, SynOverlapError::ResourceExhausted(_)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dict = dictionary(&[&["big", "large", "huge"], &["dog", "hound"]]);
        let words = ["the", "big", "dog", "saw", "a", "huge", "hound", "and", "a", "dog"];
        let source_words = ["a", "large", "hound", "saw", "the", "big", "dog"];
        let size = crate::tuple::TupleSize::new(2).unwrap();
        let plagiarized = TupleSequence::from_words(&words, size);
        let source = TupleSequence::from_words(&source_words, size);

        let sequential = MatchCounter::new(dict.clone())
            .count_matches(&plagiarized, &source)
            .unwrap();

        let config = MatchConfig::new(2)
            .with_parallel(true)
            .with_thread_pool_size(Some(4));
        let parallel = MatchCounter::with_config(dict, &config).unwrap();
        assert!(parallel.is_parallel());
        let report = parallel.count_matches(&plagiarized, &source).unwrap();

        assert_eq!(report, sequential);
        assert!(report.match_count > 0);
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let err = MatchCounter::with_config(dictionary(&[]), &MatchConfig::new(0)).unwrap_err();
        assert!(matches!(err, SynOverlapError::Configuration(_)));
    }
}
