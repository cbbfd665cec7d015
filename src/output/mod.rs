//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagram_lookup, print_high_scores, print_pool_report, print_scored_words, print_survey,
};
