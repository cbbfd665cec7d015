//! Persisted high scores, one per game mode and timing
//!
//! Scores live in a flat text file shared by every front end. Slot *i*
//! occupies lines 2i (player name, `None` when unset) and 2i+1 (score).

mod store;

pub use store::{DEFAULT_SCORES_FILE, HighScoreStore, format_records, parse_records};

use crate::game::{GameMode, Timing};
use std::fmt;

/// Index of a high-score record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot a mode/timing combination records its best score in
    ///
    /// | Mode             | Timed | Untimed |
    /// |------------------|-------|---------|
    /// | Find Anagrams!   | 0     | 1       |
    /// | Construct Words! | 2     | 3       |
    #[must_use]
    pub const fn for_game(mode: GameMode, timing: Timing) -> Self {
        let base = match mode {
            GameMode::Anagrams => 0,
            GameMode::Construct => 2,
        };
        match timing {
            Timing::Timed => Self(base),
            Timing::Untimed => Self(base + 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A stored best score; `name` is `None` until someone sets it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScore {
    pub name: Option<String>,
    pub score: u32,
}

impl HighScore {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: Some(name.into()),
            score,
        }
    }

    /// Name for display, with a stand-in for unset records
    #[must_use]
    pub fn holder(&self) -> &str {
        self.name.as_deref().unwrap_or("nobody")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_mode_table() {
        assert_eq!(Slot::for_game(GameMode::Anagrams, Timing::Timed).index(), 0);
        assert_eq!(Slot::for_game(GameMode::Anagrams, Timing::Untimed).index(), 1);
        assert_eq!(Slot::for_game(GameMode::Construct, Timing::Timed).index(), 2);
        assert_eq!(Slot::for_game(GameMode::Construct, Timing::Untimed).index(), 3);
    }

    #[test]
    fn default_is_unset_zero() {
        let score = HighScore::default();
        assert_eq!(score.name, None);
        assert_eq!(score.score, 0);
        assert_eq!(score.holder(), "nobody");
    }
}
