//! Pattern strip filter implementation.
//!
//! Deletes every match of a regular expression from inside each token. With
//! the default pattern this removes punctuation and underscores, so
//! `"don't"` becomes `"dont"` and `"--"` becomes the empty string.

use regex::Regex;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::{Result, SynOverlapError};

/// Characters that are neither whitespace nor word characters, plus `_`.
pub const DEFAULT_STRIP_PATTERN: &str = r"[^\s\w]|_";

/// A filter that removes regex matches from token text.
///
/// Tokens whose text becomes empty are marked as stopped so that a following
/// [`RemoveEmptyFilter`](super::remove_empty::RemoveEmptyFilter) drops them.
#[derive(Clone, Debug)]
pub struct PatternStripFilter {
    pattern: Regex,
}

impl PatternStripFilter {
    /// Create a filter that strips punctuation and underscores.
    pub fn new() -> Self {
        Self::with_pattern(DEFAULT_STRIP_PATTERN).expect("default strip pattern is valid")
    }

    /// Create a filter that strips a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| SynOverlapError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PatternStripFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for PatternStripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || !self.pattern.is_match(&token.text) {
                    return token;
                }
                let stripped = self.pattern.replace_all(&token.text, "");
                if stripped.is_empty() {
                    token.with_text("").stop()
                } else {
                    token.with_text(stripped.into_owned())
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pattern_strip"
    }
}
