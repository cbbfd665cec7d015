//! Letter pools for the "Construct Words!" mode

use crate::core::LetterCounts;
use crate::error::{GameError, Result};
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use tracing::debug;

/// Merge words into the smallest pool that can spell each of them
///
/// Each letter appears as many times as in the word that uses it most (the
/// maximum, not the sum). Letters are case-folded and sorted, so the result
/// does not depend on input order.
///
/// # Errors
///
/// Returns [`GameError::EmptyInput`] if `words` is empty.
///
/// # Examples
/// ```
/// use word_game::game::combine;
///
/// assert_eq!(combine(&["cat", "dog"]).unwrap(), "acdgot");
/// assert_eq!(combine(&["aab", "ab"]).unwrap(), "aab");
/// ```
pub fn combine<S: AsRef<str>>(words: &[S]) -> Result<String> {
    if words.is_empty() {
        return Err(GameError::EmptyInput);
    }

    let mut pool = LetterCounts::default();
    for word in words {
        pool.max_merge(&LetterCounts::of(word.as_ref()));
    }
    Ok(pool.to_sorted_string())
}

/// Draw `count` random lexicon words (with replacement) and combine them
///
/// Returns the drawn words and their pool.
///
/// # Errors
///
/// Returns [`GameError::EmptyInput`] if the lexicon is empty or `count` is 0.
pub fn random_pool<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    count: usize,
    rng: &mut R,
) -> Result<(Vec<String>, String)> {
    let words = (0..count)
        .map(|_| lexicon.all().choose(rng).cloned())
        .collect::<Option<Vec<String>>>()
        .ok_or(GameError::EmptyInput)?;

    let pool = combine(&words)?;
    debug!(?words, pool = %pool, "built letter pool");
    Ok((words, pool))
}

/// Every lexicon word that can be spelled from `pool`, in lexicon order
#[must_use]
pub fn possible_words(lexicon: &Lexicon, pool: &str) -> Vec<String> {
    let pool = LetterCounts::of(pool);
    lexicon
        .all()
        .par_iter()
        .filter(|word| pool.covers(&LetterCounts::of(word)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn combine_disjoint_words() {
        assert_eq!(combine(&["cat", "dog"]).unwrap(), "acdgot");
    }

    #[test]
    fn combine_takes_max_not_sum() {
        assert_eq!(combine(&["aab", "ab"]).unwrap(), "aab");
        assert_eq!(combine(&["ab", "aab"]).unwrap(), "aab");
        assert_eq!(combine(&["tea", "eat"]).unwrap(), "aet");
    }

    #[test]
    fn combine_is_order_independent() {
        let forward = combine(&["stone", "quiz", "apple"]).unwrap();
        let backward = combine(&["apple", "quiz", "stone"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn combine_folds_case() {
        assert_eq!(combine(&["CAT", "Dog"]).unwrap(), "acdgot");
    }

    #[test]
    fn combine_single_word_sorts_it() {
        assert_eq!(combine(&["banana"]).unwrap(), "aaabnn");
    }

    #[test]
    fn combine_empty_fails() {
        let words: [&str; 0] = [];
        assert!(matches!(combine(&words), Err(GameError::EmptyInput)));
    }

    #[test]
    fn pool_spells_every_input() {
        let words = ["letter", "kettle", "settle"];
        let pool = combine(&words).unwrap();
        for word in words {
            assert!(crate::core::is_makeable(&pool, word), "{word} from {pool}");
        }
    }

    #[test]
    fn random_pool_uses_lexicon_words() {
        let lexicon = Lexicon::from_words(["cat", "dog", "fox"]);
        let mut rng = StdRng::seed_from_u64(11);

        let (words, pool) = random_pool(&lexicon, 2, &mut rng).unwrap();
        assert_eq!(words.len(), 2);
        for word in &words {
            assert!(lexicon.contains(word));
            assert!(crate::core::is_makeable(&pool, word));
        }
        assert_eq!(pool, combine(&words).unwrap());
    }

    #[test]
    fn random_pool_from_empty_lexicon_fails() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = random_pool(&Lexicon::default(), 2, &mut rng);
        assert!(matches!(result, Err(GameError::EmptyInput)));
    }

    #[test]
    fn random_pool_of_zero_words_fails() {
        let lexicon = Lexicon::from_words(["cat"]);
        let mut rng = StdRng::seed_from_u64(11);
        assert!(matches!(
            random_pool(&lexicon, 0, &mut rng),
            Err(GameError::EmptyInput)
        ));
    }

    #[test]
    fn possible_words_lists_makeable_entries() {
        let lexicon = Lexicon::from_words(["cat", "act", "dog", "god", "goat", "cot", "toad"]);
        let words = possible_words(&lexicon, "acdgot");
        assert_eq!(words, vec!["cat", "act", "dog", "god", "goat", "cot", "toad"]);

        let words = possible_words(&lexicon, "act");
        assert_eq!(words, vec!["cat", "act"]);
    }
}
