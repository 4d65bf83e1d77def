//! Token filter implementations for token transformation.
//!
//! Filters rewrite the token stream produced by a tokenizer. The filters here
//! cover the normalization a document goes through before windowing:
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`pattern_strip::PatternStripFilter`] - Deletes regex matches inside tokens
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//!
//! # Examples
//!
//! ```
//! use synoverlap::analysis::token_filter::Filter;
//! use synoverlap::analysis::token_filter::lowercase::LowercaseFilter;
//! use synoverlap::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_strip;
pub mod remove_empty;

pub use lowercase::LowercaseFilter;
pub use pattern_strip::PatternStripFilter;
pub use remove_empty::RemoveEmptyFilter;
