//! Text analysis for synoverlap.
//!
//! Turns raw document text into normalized words and holds the synonym
//! machinery that works on those words.

pub mod analyzer;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
