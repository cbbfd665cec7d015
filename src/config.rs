//! Gameplay settings

use crate::game::DEFAULT_MAX_ATTEMPTS;
use std::time::Duration;

/// Tunable rules shared by every front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong answers allowed per round
    pub lives: u32,
    /// Anagrams a base word needs to be picked
    pub min_anagrams: usize,
    /// Shortest word accepted when constructing words
    pub min_word_len: usize,
    /// Countdown for timed rounds
    pub time_limit: Duration,
    /// Words combined into a letter pool
    pub pool_words: usize,
    /// Random draws before the anagram search gives up
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            min_anagrams: 2,
            min_word_len: 3,
            time_limit: Duration::from_secs(60),
            pool_words: 2,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
