//! Analyzers turn raw text into the normalized words used for windowing.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Words
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`WordAnalyzer`](word::WordAnalyzer) - Document normalization (lowercase,
//!   strip punctuation and underscores, split on whitespace)
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use synoverlap::analysis::analyzer::Analyzer;
//! use synoverlap::analysis::analyzer::word::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new();
//! let words = analyzer.words("The cat's hat!").unwrap();
//! assert_eq!(words, vec!["the", "cats", "hat"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts, in order.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod pipeline;
pub mod word;

pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
