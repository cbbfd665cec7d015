//! One-shot dictionary queries
//!
//! Anagram lookup, word scoring and pool building from the command line.

use crate::core::score_of;
use crate::error::{GameError, Result};
use crate::game::{combine, find_anagrams, possible_words};
use crate::lexicon::Lexicon;

/// Result of looking up a word's anagrams
pub struct AnagramLookup {
    pub word: String,
    pub in_lexicon: bool,
    pub anagrams: Vec<String>,
}

/// Find the anagrams of `word` in the lexicon
#[must_use]
pub fn lookup_anagrams(lexicon: &Lexicon, word: &str) -> AnagramLookup {
    let word = word.trim().to_lowercase();
    AnagramLookup {
        in_lexicon: lexicon.contains(&word),
        anagrams: find_anagrams(lexicon, &word),
        word,
    }
}

/// A word and its score, or the reason it cannot be scored
pub struct ScoredWord {
    pub word: String,
    pub score: Result<u32>,
}

/// Score each word independently
#[must_use]
pub fn score_words<S: AsRef<str>>(words: &[S]) -> Vec<ScoredWord> {
    words
        .iter()
        .map(|word| ScoredWord {
            word: word.as_ref().to_string(),
            score: score_of(word.as_ref()),
        })
        .collect()
}

/// Result of combining words into a pool
pub struct PoolReport {
    pub words: Vec<String>,
    pub pool: String,
    /// Makeable lexicon words with their scores, best first
    pub makeable: Vec<(String, u32)>,
}

/// Combine `words` into a pool, optionally listing what it can spell
///
/// Only words of at least `min_word_len` letters that can be scored are
/// listed.
///
/// # Errors
///
/// Returns [`GameError::EmptyInput`] if `words` is empty.
pub fn build_pool<S: AsRef<str>>(
    lexicon: &Lexicon,
    words: &[S],
    list: bool,
    min_word_len: usize,
) -> Result<PoolReport> {
    let pool = combine(words)?;

    let mut makeable: Vec<(String, u32)> = if list {
        possible_words(lexicon, &pool)
            .into_iter()
            .filter(|word| word.chars().count() >= min_word_len)
            .filter_map(|word| score_of(&word).ok().map(|score| (word, score)))
            .collect()
    } else {
        Vec::new()
    };
    makeable.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    makeable.dedup();

    Ok(PoolReport {
        words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        pool,
        makeable,
    })
}

impl ScoredWord {
    /// Score for display, with unscorable words counted as zero
    #[must_use]
    pub fn points(&self) -> u32 {
        self.score.as_ref().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn error(&self) -> Option<&GameError> {
        self.score.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["listen", "silent", "enlist", "cat", "act", "dog", "god", "goat"])
    }

    #[test]
    fn lookup_reports_membership() {
        let lexicon = lexicon();

        let found = lookup_anagrams(&lexicon, "Listen");
        assert!(found.in_lexicon);
        assert_eq!(found.word, "listen");
        assert_eq!(found.anagrams, vec!["silent", "enlist"]);

        let missing = lookup_anagrams(&lexicon, "tinsel");
        assert!(!missing.in_lexicon);
        assert_eq!(missing.anagrams.len(), 3);
    }

    #[test]
    fn scores_each_word() {
        let scored = score_words(&["cab", "quiz", "c4b"]);
        assert_eq!(scored[0].points(), 7);
        assert_eq!(scored[1].points(), 22);
        assert!(scored[2].error().is_some());
        assert_eq!(scored[2].points(), 0);
    }

    #[test]
    fn pool_report_lists_best_words_first() {
        let lexicon = lexicon();
        let report = build_pool(&lexicon, &["cat", "dog"], true, 3).unwrap();

        assert_eq!(report.pool, "acdgot");
        assert_eq!(report.words, vec!["cat", "dog"]);
        // All of these score 5; ties are alphabetical
        let words: Vec<&str> = report.makeable.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["act", "cat", "dog", "goat", "god"]);
    }

    #[test]
    fn pool_report_without_listing() {
        let report = build_pool(&lexicon(), &["aab", "ab"], false, 3).unwrap();
        assert_eq!(report.pool, "aab");
        assert!(report.makeable.is_empty());
    }

    #[test]
    fn pool_report_needs_words() {
        let words: [&str; 0] = [];
        assert!(matches!(
            build_pool(&lexicon(), &words, true, 3),
            Err(GameError::EmptyInput)
        ));
    }
}
