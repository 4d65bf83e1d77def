//! Command line interface.
//!
//! - [`args`] - Argument definitions
//! - [`commands`] - Running a comparison
//! - [`output`] - Human and JSON rendering of results

pub mod args;
pub mod commands;
pub mod output;
