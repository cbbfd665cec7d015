//! Anagram discovery
//!
//! Finds the words of a lexicon that share a base word's letters, and picks
//! random base words for the "Find Anagrams!" mode.

use crate::core::LetterCounts;
use crate::error::{GameError, Result};
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Random draws allowed before [`pick_anagram_set`] gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 2000;

/// A base word together with all of its anagrams in the lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramSet {
    pub base: String,
    /// Every other lexicon word with the same letters, in lexicon order
    pub anagrams: Vec<String>,
}

/// All lexicon words with exactly the letters of `base`, except `base` itself
///
/// Comparison is case-insensitive and every lexicon entry equal to `base`
/// is excluded. An empty result is a normal outcome.
///
/// # Examples
/// ```
/// use word_game::game::find_anagrams;
/// use word_game::lexicon::Lexicon;
///
/// let lexicon = Lexicon::from_words(["listen", "silent", "enlist", "cat"]);
/// assert_eq!(find_anagrams(&lexicon, "listen"), vec!["silent", "enlist"]);
/// ```
#[must_use]
pub fn find_anagrams(lexicon: &Lexicon, base: &str) -> Vec<String> {
    let base_lower = base.to_lowercase();
    let base_counts = LetterCounts::of(&base_lower);
    let base_len = base_counts.total();

    lexicon
        .all()
        .par_iter()
        .filter(|word| {
            let lower = word.to_lowercase();
            // Folding can change the length, so compare folded lengths
            lower.chars().count() == base_len
                && lower != base_lower
                && LetterCounts::of(&lower) == base_counts
        })
        .cloned()
        .collect()
}

/// Pick a random base word that has at least `min_anagrams` anagrams
///
/// Draws uniformly from the lexicon, at most `max_attempts` times.
///
/// # Errors
///
/// Returns [`GameError::NoSuitableWord`] if no draw qualifies within the
/// budget, including immediately when the lexicon is empty.
pub fn pick_anagram_set<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    min_anagrams: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<AnagramSet> {
    let words = lexicon.all();

    for attempt in 1..=max_attempts {
        let Some(base) = words.choose(rng) else {
            break;
        };

        let anagrams = find_anagrams(lexicon, base);
        if anagrams.len() >= min_anagrams {
            debug!(
                base = %base,
                anagrams = anagrams.len(),
                attempt,
                "picked anagram base word"
            );
            return Ok(AnagramSet {
                base: base.clone(),
                anagrams,
            });
        }
    }

    let attempts = if words.is_empty() { 0 } else { max_attempts };
    warn!(
        min_anagrams,
        attempts,
        source = lexicon.source(),
        "no suitable anagram base word"
    );
    Err(GameError::NoSuitableWord {
        min_anagrams,
        attempts,
    })
}

/// Groups of lexicon words that are anagrams of each other
///
/// Only groups with at least `min_size` members are returned, largest
/// first (ties in order of first appearance). Words are grouped
/// case-insensitively; each group keeps lexicon order.
#[must_use]
pub fn anagram_families(lexicon: &Lexicon, min_size: usize) -> Vec<Vec<String>> {
    let keyed: Vec<(String, &String)> = lexicon
        .all()
        .par_iter()
        .map(|word| (LetterCounts::of(word).to_sorted_string(), word))
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut groups: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for (key, word) in keyed {
        let group = groups.entry(key).or_insert_with_key(|key| {
            order.push(key.clone());
            Vec::new()
        });
        group.push(word.clone());
    }

    let mut families: Vec<Vec<String>> = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|group| group.len() >= min_size.max(1))
        .collect();

    // Stable sort keeps first-appearance order among equal sizes
    families.sort_by(|a, b| b.len().cmp(&a.len()));
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_lexicon() -> Lexicon {
        Lexicon::from_words(["listen", "silent", "enlist", "cat", "act", "dog"])
    }

    #[test]
    fn finds_anagrams_excluding_base() {
        let lexicon = Lexicon::from_words(["listen", "silent", "enlist", "cat"]);
        let mut anagrams = find_anagrams(&lexicon, "listen");
        anagrams.sort();
        assert_eq!(anagrams, vec!["enlist", "silent"]);
    }

    #[test]
    fn no_anagrams_is_empty() {
        let lexicon = sample_lexicon();
        assert!(find_anagrams(&lexicon, "dog").is_empty());
        assert!(find_anagrams(&lexicon, "zebra").is_empty());
    }

    #[test]
    fn base_need_not_be_in_lexicon() {
        let lexicon = sample_lexicon();
        assert_eq!(find_anagrams(&lexicon, "tinsel"), vec!["listen", "silent", "enlist"]);
    }

    #[test]
    fn base_excluded_case_insensitively() {
        let lexicon = Lexicon::from_words(["Listen", "listen", "silent"]);
        assert_eq!(find_anagrams(&lexicon, "LISTEN"), vec!["silent"]);
    }

    #[test]
    fn matching_ignores_case() {
        let lexicon = Lexicon::from_words(["Silent", "cat"]);
        assert_eq!(find_anagrams(&lexicon, "listen"), vec!["Silent"]);
    }

    #[test]
    fn length_compared_after_case_folding() {
        // U+0130 lower-cases to two characters: 'i' and a combining dot
        let lexicon = Lexicon::from_words(["i\u{307}"]);
        assert!(crate::core::equals("\u{130}", "i\u{307}"));
        assert_eq!(find_anagrams(&lexicon, "\u{130}"), vec!["i\u{307}"]);
    }

    #[test]
    fn repeated_letters_must_match() {
        let lexicon = Lexicon::from_words(["aab", "abb", "baa"]);
        assert_eq!(find_anagrams(&lexicon, "aba"), vec!["aab", "baa"]);
    }

    #[test]
    fn pick_returns_qualifying_set() {
        let lexicon = sample_lexicon();
        let mut rng = StdRng::seed_from_u64(7);

        let set = pick_anagram_set(&lexicon, 2, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
        assert!(["listen", "silent", "enlist"].contains(&set.base.as_str()));
        assert_eq!(set.anagrams.len(), 2);
        assert!(!set.anagrams.contains(&set.base));
    }

    #[test]
    fn pick_zero_minimum_accepts_any_word() {
        let lexicon = Lexicon::from_words(["dog"]);
        let mut rng = StdRng::seed_from_u64(1);

        let set = pick_anagram_set(&lexicon, 0, 1, &mut rng).unwrap();
        assert_eq!(set.base, "dog");
        assert!(set.anagrams.is_empty());
    }

    #[test]
    fn pick_gives_up_after_budget() {
        let lexicon = Lexicon::from_words(["dog", "cat", "fox"]);
        let mut rng = StdRng::seed_from_u64(3);

        let result = pick_anagram_set(&lexicon, 1, 50, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::NoSuitableWord {
                min_anagrams: 1,
                attempts: 50
            })
        ));
    }

    #[test]
    fn pick_from_empty_lexicon_fails_immediately() {
        let lexicon = Lexicon::default();
        let mut rng = StdRng::seed_from_u64(3);

        let result = pick_anagram_set(&lexicon, 1, 1000, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::NoSuitableWord { attempts: 0, .. })
        ));
    }

    #[test]
    fn embedded_dictionary_supports_anagram_mode() {
        let lexicon = Lexicon::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        let set = pick_anagram_set(&lexicon, 2, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
        assert!(set.anagrams.len() >= 2);
    }

    #[test]
    fn families_grouped_and_sorted() {
        let lexicon = sample_lexicon();
        let families = anagram_families(&lexicon, 2);
        assert_eq!(
            families,
            vec![
                vec!["listen".to_string(), "silent".to_string(), "enlist".to_string()],
                vec!["cat".to_string(), "act".to_string()],
            ]
        );
    }

    #[test]
    fn families_minimum_one_includes_singletons() {
        let lexicon = sample_lexicon();
        let families = anagram_families(&lexicon, 1);
        assert_eq!(families.len(), 3);
        assert_eq!(families[2], vec!["dog".to_string()]);
    }
}
