//! Core word rules
//!
//! Letter counting, makeability and scoring. Pure functions with no I/O.

pub mod letters;
mod score;

pub use letters::{LetterCounts, count, equals, is_makeable};
pub use score::{SCORE_TABLE, letter_score, score_of};
