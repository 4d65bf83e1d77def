//! Synonym handling: the word → synonyms index and tuple expansion.
//!
//! - [`dictionary`] - Synonym dictionary building, parsing and lookup
//! - [`expander`] - Cartesian-product expansion of word tuples
//!
//! # Examples
//!
//! ```
//! use synoverlap::analysis::synonym::{SynonymDictionary, TupleExpander};
//! use synoverlap::tuple::Tuple;
//!
//! let dict = SynonymDictionary::from_synonym_groups([["big", "large"]]).unwrap();
//! let expander = TupleExpander::new(&dict);
//!
//! let variants = expander.expand(&Tuple::new(["big", "dog"])).unwrap();
//! assert_eq!(variants.len(), 2);
//! assert_eq!(variants[1].words(), ["large", "dog"]);
//! ```

pub mod dictionary;
pub mod expander;

pub use dictionary::{SynonymDictionary, SynonymFormat};
pub use expander::TupleExpander;
