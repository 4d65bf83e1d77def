//! Case folding for document words.
//!
//! Runs right after tokenization so that `Jog`, `JOG` and `jog` compare equal
//! both in documents and in synonym files.
//!
//! ```
//! use synoverlap::analysis::token::Token;
//! use synoverlap::analysis::token_filter::Filter;
//! use synoverlap::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let tokens = vec![Token::new("Sprint", 0), Token::new("ÉLAN", 1)];
//! let words: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, ["sprint", "élan"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases token text. Stopped tokens are left as they are.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else if token.text.is_ascii() {
                    token.with_text(token.text.to_ascii_lowercase())
                } else {
                    token.with_text(token.text.to_lowercase())
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
