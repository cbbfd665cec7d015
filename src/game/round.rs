//! Round rules for both game modes
//!
//! A round tracks lives, found answers and score, and judges raw guesses.
//! It knows nothing about time or input devices: front ends feed it
//! guesses and stop calling it when their timer or the player says so.

use super::anagram::AnagramSet;
use super::pool::possible_words;
use crate::core::{LetterCounts, score_of};
use crate::error::Result;
use crate::lexicon::Lexicon;

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Verdict on a guess in "Find Anagrams!"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnagramOutcome {
    /// A new anagram; score goes up by one
    Correct,
    /// The guess is the base word itself
    BaseWord,
    /// Already found this round
    AlreadyFound,
    /// Right letters but not a word; costs a life
    NotInDictionary,
    /// Does not use exactly the base word's letters
    InvalidLetters,
}

impl AnagramOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::BaseWord => "That's the original word!",
            Self::AlreadyFound => "Already answered!",
            Self::NotInDictionary => "Not in dictionary!",
            Self::InvalidLetters => "Use all the letters!",
        }
    }

    #[must_use]
    pub const fn costs_life(self) -> bool {
        matches!(self, Self::NotInDictionary)
    }
}

/// Verdict on a guess in "Construct Words!"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructOutcome {
    /// A new dictionary word worth `points`
    Accepted { points: u32 },
    /// Already found this round
    AlreadyFound,
    /// Spellable from the pool but not a word; costs a life
    NotInDictionary,
    /// Too short or needs letters the pool lacks
    Invalid,
}

impl ConstructOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted { .. } => "Correct!",
            Self::AlreadyFound => "Already answered!",
            Self::NotInDictionary => "Not in dictionary!",
            Self::Invalid => "Invalid answer!",
        }
    }

    #[must_use]
    pub const fn costs_life(self) -> bool {
        matches!(self, Self::NotInDictionary)
    }
}

/// What a finished round leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub found: Vec<String>,
    /// Answers the player did not find
    pub missed: Vec<String>,
}

/// State of one "Find Anagrams!" round
#[derive(Debug, Clone)]
pub struct AnagramRound {
    base: String,
    base_counts: LetterCounts,
    remaining: Vec<String>,
    found: Vec<String>,
    lives: u32,
    total: usize,
}

impl AnagramRound {
    #[must_use]
    pub fn new(set: AnagramSet, lives: u32) -> Self {
        let base = set.base.to_lowercase();
        let mut remaining: Vec<String> = Vec::with_capacity(set.anagrams.len());
        for answer in set.anagrams {
            let answer = answer.to_lowercase();
            if !remaining.contains(&answer) {
                remaining.push(answer);
            }
        }

        Self {
            base_counts: LetterCounts::of(&base),
            total: remaining.len(),
            base,
            remaining,
            found: Vec::new(),
            lives,
        }
    }

    /// Judge a raw guess and update the round
    pub fn guess(&mut self, raw: &str) -> AnagramOutcome {
        let answer = normalize(raw);

        let outcome = if LetterCounts::of(&answer) != self.base_counts {
            AnagramOutcome::InvalidLetters
        } else if self.found.contains(&answer) {
            AnagramOutcome::AlreadyFound
        } else if let Some(pos) = self.remaining.iter().position(|w| *w == answer) {
            self.remaining.remove(pos);
            self.found.push(answer);
            AnagramOutcome::Correct
        } else if answer == self.base {
            AnagramOutcome::BaseWord
        } else {
            AnagramOutcome::NotInDictionary
        };

        if outcome.costs_life() {
            self.lives = self.lives.saturating_sub(1);
        }
        outcome
    }

    /// Out of lives, or nothing left to find
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.lives == 0 || self.remaining.is_empty()
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// One point per anagram found
    #[must_use]
    pub fn score(&self) -> u32 {
        self.found.len() as u32
    }

    /// Highest score this round allows
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn finish(self) -> RoundSummary {
        RoundSummary {
            score: self.score(),
            found: self.found,
            missed: self.remaining,
        }
    }
}

/// State of one "Construct Words!" round
#[derive(Debug, Clone)]
pub struct ConstructRound {
    pool: String,
    pool_counts: LetterCounts,
    found: Vec<String>,
    lives: u32,
    min_word_len: usize,
    score: u32,
}

impl ConstructRound {
    #[must_use]
    pub fn new(pool: impl Into<String>, lives: u32, min_word_len: usize) -> Self {
        let pool = pool.into().to_lowercase();
        Self {
            pool_counts: LetterCounts::of(&pool),
            pool,
            found: Vec::new(),
            lives,
            min_word_len,
            score: 0,
        }
    }

    /// Judge a raw guess against the pool and the lexicon
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownLetter`](crate::error::GameError::UnknownLetter)
    /// if an accepted dictionary word contains a character with no score.
    pub fn guess(&mut self, lexicon: &Lexicon, raw: &str) -> Result<ConstructOutcome> {
        let answer = normalize(raw);

        let outcome = if answer.chars().count() < self.min_word_len
            || !self.pool_counts.covers(&LetterCounts::of(&answer))
        {
            ConstructOutcome::Invalid
        } else if self.found.contains(&answer) {
            ConstructOutcome::AlreadyFound
        } else if lexicon.contains(&answer) {
            let points = score_of(&answer)?;
            self.score += points;
            self.found.push(answer);
            ConstructOutcome::Accepted { points }
        } else {
            ConstructOutcome::NotInDictionary
        };

        if outcome.costs_life() {
            self.lives = self.lives.saturating_sub(1);
        }
        Ok(outcome)
    }

    /// Only running out of lives ends a construct round on its own
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.lives == 0
    }

    #[must_use]
    pub fn pool(&self) -> &str {
        &self.pool
    }

    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Sum of the Scrabble scores of accepted words
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// End the round, listing the long-enough lexicon words left unfound
    #[must_use]
    pub fn finish(self, lexicon: &Lexicon) -> RoundSummary {
        let mut missed: Vec<String> = Vec::new();
        for word in possible_words(lexicon, &self.pool) {
            let word = word.to_lowercase();
            if word.chars().count() >= self.min_word_len
                && !self.found.contains(&word)
                && !missed.contains(&word)
            {
                missed.push(word);
            }
        }

        RoundSummary {
            score: self.score,
            found: self.found,
            missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn listen_round(lives: u32) -> AnagramRound {
        AnagramRound::new(
            AnagramSet {
                base: "listen".to_string(),
                anagrams: vec!["silent".to_string(), "enlist".to_string()],
            },
            lives,
        )
    }

    #[test]
    fn anagram_correct_answers_score() {
        let mut round = listen_round(3);
        assert_eq!(round.total(), 2);

        assert_eq!(round.guess("silent"), AnagramOutcome::Correct);
        assert_eq!(round.score(), 1);
        assert!(!round.is_over());

        assert_eq!(round.guess("  ENLIST "), AnagramOutcome::Correct);
        assert_eq!(round.score(), 2);
        assert!(round.is_over());
        assert_eq!(round.lives(), 3);
    }

    #[test]
    fn anagram_wrong_letters_cost_nothing() {
        let mut round = listen_round(3);
        assert_eq!(round.guess("list"), AnagramOutcome::InvalidLetters);
        assert_eq!(round.guess("cat"), AnagramOutcome::InvalidLetters);
        assert_eq!(round.lives(), 3);
    }

    #[test]
    fn anagram_repeat_and_base_word() {
        let mut round = listen_round(3);
        round.guess("silent");
        assert_eq!(round.guess("silent"), AnagramOutcome::AlreadyFound);
        assert_eq!(round.guess("listen"), AnagramOutcome::BaseWord);
        assert_eq!(round.lives(), 3);
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn anagram_unknown_arrangement_costs_life() {
        let mut round = listen_round(2);
        assert_eq!(round.guess("tinsel"), AnagramOutcome::NotInDictionary);
        assert_eq!(round.lives(), 1);
        assert_eq!(round.guess("nlsiet"), AnagramOutcome::NotInDictionary);
        assert_eq!(round.lives(), 0);
        assert!(round.is_over());
    }

    #[test]
    fn anagram_finish_reports_missed() {
        let mut round = listen_round(3);
        round.guess("enlist");
        let summary = round.finish();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.found, vec!["enlist"]);
        assert_eq!(summary.missed, vec!["silent"]);
    }

    #[test]
    fn anagram_duplicate_answers_collapsed() {
        let round = AnagramRound::new(
            AnagramSet {
                base: "Listen".to_string(),
                anagrams: vec!["silent".to_string(), "Silent".to_string()],
            },
            3,
        );
        assert_eq!(round.total(), 1);
        assert_eq!(round.base(), "listen");
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "act", "dog", "god", "goat", "to", "don't"])
    }

    #[test]
    fn construct_accepts_dictionary_words() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("acdgot", 3, 3);

        assert_eq!(
            round.guess(&lexicon, "cat").unwrap(),
            ConstructOutcome::Accepted { points: 5 }
        );
        assert_eq!(
            round.guess(&lexicon, "GOAT").unwrap(),
            ConstructOutcome::Accepted { points: 5 }
        );
        assert_eq!(round.score(), 10);
        assert_eq!(round.found(), &["cat", "goat"]);
    }

    #[test]
    fn construct_rejects_short_or_unmakeable() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("acdgot", 3, 3);

        assert_eq!(round.guess(&lexicon, "to").unwrap(), ConstructOutcome::Invalid);
        assert_eq!(round.guess(&lexicon, "zebra").unwrap(), ConstructOutcome::Invalid);
        assert_eq!(round.guess(&lexicon, "good").unwrap(), ConstructOutcome::Invalid);
        assert_eq!(round.lives(), 3);
    }

    #[test]
    fn construct_non_words_cost_lives() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("acdgot", 2, 3);

        assert_eq!(
            round.guess(&lexicon, "cot").unwrap(),
            ConstructOutcome::NotInDictionary
        );
        assert_eq!(
            round.guess(&lexicon, "tag").unwrap(),
            ConstructOutcome::NotInDictionary
        );
        assert!(round.is_over());
    }

    #[test]
    fn construct_repeat_is_already_found() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("acdgot", 3, 3);
        round.guess(&lexicon, "dog").unwrap();
        assert_eq!(
            round.guess(&lexicon, "dog").unwrap(),
            ConstructOutcome::AlreadyFound
        );
        assert_eq!(round.score(), 5);
    }

    #[test]
    fn construct_unscorable_word_is_an_error() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("'dnot", 3, 3);
        assert!(matches!(
            round.guess(&lexicon, "don't"),
            Err(GameError::UnknownLetter { letter: '\'', .. })
        ));
    }

    #[test]
    fn construct_finish_lists_missed_words() {
        let lexicon = lexicon();
        let mut round = ConstructRound::new("acdgot", 3, 3);
        round.guess(&lexicon, "cat").unwrap();

        let summary = round.finish(&lexicon);
        assert_eq!(summary.score, 5);
        assert_eq!(summary.missed, vec!["act", "dog", "god", "goat"]);
    }
}
