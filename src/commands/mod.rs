//! Command implementations

pub mod lookup;
pub mod simple;
pub mod survey;

pub use lookup::{AnagramLookup, PoolReport, ScoredWord, build_pool, lookup_anagrams, score_words};
pub use simple::{Console, run_simple};
pub use survey::{SurveyStatistics, run_survey};
