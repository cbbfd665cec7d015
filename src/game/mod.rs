//! Game modes
//!
//! Anagram discovery for "Find Anagrams!", letter pools for
//! "Construct Words!", and the per-round rules of both.

mod anagram;
mod pool;
pub mod round;

pub use anagram::{
    AnagramSet, DEFAULT_MAX_ATTEMPTS, anagram_families, find_anagrams, pick_anagram_set,
};
pub use pool::{combine, possible_words, random_pool};
pub use round::{AnagramOutcome, AnagramRound, ConstructOutcome, ConstructRound, RoundSummary};

use std::fmt;

/// The two ways to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Find every anagram of a random word
    Anagrams,
    /// Build words from a pool made of two random words
    Construct,
}

impl GameMode {
    pub const ALL: [Self; 2] = [Self::Anagrams, Self::Construct];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Anagrams => "Find Anagrams!",
            Self::Construct => "Construct Words!",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether a round runs against the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    Timed,
    Untimed,
}

impl Timing {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Timed => Self::Untimed,
            Self::Untimed => Self::Timed,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timed => f.write_str("Timed"),
            Self::Untimed => f.write_str("Untimed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_titles() {
        assert_eq!(GameMode::Anagrams.to_string(), "Find Anagrams!");
        assert_eq!(GameMode::Construct.to_string(), "Construct Words!");
    }

    #[test]
    fn timing_toggle_round_trips() {
        assert_eq!(Timing::Timed.toggled(), Timing::Untimed);
        assert_eq!(Timing::Timed.toggled().toggled(), Timing::Timed);
    }
}
