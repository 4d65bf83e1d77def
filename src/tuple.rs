//! Word tuples and the sliding windows that produce them.
//!
//! A [`Tuple`] is `N` consecutive normalized words. A [`TupleSequence`] is
//! every window of size `N` over a document's word stream, advancing one word
//! at a time, so `words - N + 1` tuples in total.
//!
//! A document with fewer than `N` words produces an empty sequence. Whether
//! that is acceptable is decided by the consumer: the match counter rejects an
//! empty plagiarized sequence but accepts an empty source.
//!
//! # Examples
//!
//! ```
//! use synoverlap::tuple::{TupleSequence, TupleSize};
//!
//! let words = ["the", "cat", "sat", "down"];
//! let sequence = TupleSequence::from_words(&words, TupleSize::new(3).unwrap());
//!
//! assert_eq!(sequence.len(), 2);
//! assert_eq!(sequence[0].words(), ["the", "cat", "sat"]);
//! assert_eq!(sequence[1].words(), ["cat", "sat", "down"]);
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Index;

use crate::error::{Result, SynOverlapError};

/// Number of words per tuple used when nothing else is configured.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Validated window size (at least one word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleSize(NonZeroUsize);

impl TupleSize {
    /// Create a tuple size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(TupleSize).ok_or_else(|| {
            SynOverlapError::configuration(format!(
                "tuple size must be a positive integer, got {size}"
            ))
        })
    }

    /// The size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TupleSize {
    fn default() -> Self {
        TupleSize(NonZeroUsize::new(DEFAULT_TUPLE_SIZE).expect("default tuple size is non-zero"))
    }
}

impl fmt::Display for TupleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, fixed-length window of words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tuple(Vec<String>);

impl Tuple {
    /// Build a tuple from any sequence of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tuple(words.into_iter().map(Into::into).collect())
    }

    /// The words of this tuple, in order.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the tuple.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length tuple.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Tuple {
    fn from(words: Vec<String>) -> Self {
        Tuple(words)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(" "))
    }
}

/// All sliding windows of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TupleSequence {
    tuples: Vec<Tuple>,
}

impl TupleSequence {
    /// Slide a window of `size` words across `words`, one word at a step.
    pub fn from_words<S: AsRef<str>>(words: &[S], size: TupleSize) -> Self {
        let tuples = words
            .windows(size.get())
            .map(|window| Tuple::new(window.iter().map(|w| w.as_ref().to_string())))
            .collect();
        TupleSequence { tuples }
    }

    /// Number of tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// True when the document was shorter than the tuple size.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterate over the tuples in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    /// The tuples as a slice.
    pub fn as_slice(&self) -> &[Tuple] {
        &self.tuples
    }
}

impl Index<usize> for TupleSequence {
    type Output = Tuple;

    fn index(&self, index: usize) -> &Tuple {
        &self.tuples[index]
    }
}

impl<'a> IntoIterator for &'a TupleSequence {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

impl FromIterator<Tuple> for TupleSequence {
    fn from_iter<I: IntoIterator<Item = Tuple>>(iter: I) -> Self {
        TupleSequence {
            tuples: iter.into_iter().collect(),
        }
    }
}
