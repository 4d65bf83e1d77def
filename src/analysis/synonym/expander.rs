//! Synonym expansion of word tuples.
//!
//! Every position of a tuple is independently replaced by each member of its
//! equivalence class, so the expansion of a tuple is the Cartesian product of
//! the per-position candidate lists:
//!
//! ```text
//! tuple:       (big,   dog)
//! candidates:  [big, large] × [dog]
//! expansion:   (big dog), (large dog)
//! ```
//!
//! The product is walked with an odometer over candidate indices rather than by
//! recursion, so the tuple length never touches the call stack. The rightmost
//! position turns fastest and the original tuple is always produced first.
//!
//! Expansion size is `∏ |candidates_p|`, at worst `max_group_size ^ N`. A cap
//! can be set with [`TupleExpander::with_max_variants`]; tuples over the cap
//! fail before any variant is produced.

use crate::analysis::synonym::dictionary::SynonymDictionary;
use crate::error::{Result, SynOverlapError};
use crate::tuple::Tuple;

/// Expansions larger than this are logged at debug level.
const LARGE_EXPANSION: u128 = 10_000;

/// Enumerates the synonym variants of tuples.
#[derive(Debug, Clone, Copy)]
pub struct TupleExpander<'a> {
    dictionary: &'a SynonymDictionary,
    max_variants: Option<usize>,
}

impl<'a> TupleExpander<'a> {
    /// Create an expander over `dictionary` with no variant cap.
    pub fn new(dictionary: &'a SynonymDictionary) -> Self {
        Self {
            dictionary,
            max_variants: None,
        }
    }

    /// Refuse to expand tuples with more than `max_variants` variants.
    pub fn with_max_variants(mut self, max_variants: Option<usize>) -> Self {
        self.max_variants = max_variants;
        self
    }

    /// The dictionary used for expansion.
    pub fn dictionary(&self) -> &'a SynonymDictionary {
        self.dictionary
    }

    /// Number of variants `tuple` expands to, saturating at `u128::MAX`.
    pub fn expansion_size(&self, tuple: &Tuple) -> u128 {
        tuple.words().iter().fold(1u128, |size, word| {
            size.saturating_mul(self.dictionary.candidates(word).len() as u128)
        })
    }

    /// All variants of `tuple`, each exactly once, the original first.
    pub fn expand(&self, tuple: &Tuple) -> Result<Vec<Tuple>> {
        let mut variants = Vec::new();
        self.for_each_variant(tuple, |variant| {
            variants.push(Tuple::new(variant.iter().copied()));
        })?;
        Ok(variants)
    }

    /// Call `visit` with every variant of `tuple` without allocating a
    /// [`Tuple`] per variant. Returns the number of variants visited.
    pub fn for_each_variant<'v, F>(&self, tuple: &'v Tuple, mut visit: F) -> Result<usize>
    where
        'a: 'v,
        F: FnMut(&[&'v str]),
    {
        let candidates: Vec<Vec<&'v str>> = tuple
            .words()
            .iter()
            .map(|word| self.dictionary.candidates(word))
            .collect();

        let size = candidates
            .iter()
            .fold(1u128, |size, c| size.saturating_mul(c.len() as u128));
        if let Some(cap) = self.max_variants
            && size > cap as u128
        {
            return Err(SynOverlapError::resource_exhausted(format!(
                "tuple {tuple} expands to {size} variants, over the limit of {cap}"
            )));
        }
        if size > LARGE_EXPANSION {
            log::debug!("tuple {tuple} expands to {size} variants");
        }

        let width = candidates.len();
        let mut indices = vec![0usize; width];
        let mut variant: Vec<&str> = candidates.iter().map(|c| c[0]).collect();
        let mut visited = 0usize;

        loop {
            visit(&variant);
            visited += 1;

            // Advance the odometer; when every position wraps, we are done.
            let mut position = width;
            loop {
                if position == 0 {
                    return Ok(visited);
                }
                position -= 1;
                indices[position] += 1;
                if indices[position] < candidates[position].len() {
                    variant[position] = candidates[position][indices[position]];
                    break;
                }
                indices[position] = 0;
                variant[position] = candidates[position][0];
            }
        }
    }
}
