//! Letter multisets
//!
//! A word reduced to how many times each letter occurs. Two words are
//! anagrams exactly when their multisets are equal, and a word can be built
//! from a pool exactly when the pool's multiset covers the word's.

use rustc_hash::FxHashMap;

/// Occurrence count of every character in a case-folded word
///
/// Letters that do not occur are absent from the map; stored counts are
/// always positive, so derived equality is multiset equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Tally the characters of `word` after lower-casing it
    ///
    /// # Examples
    /// ```
    /// use word_game::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("Apple");
    /// assert_eq!(counts.get('p'), 2);
    /// assert_eq!(counts, LetterCounts::of("APPLE"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars().flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True if every letter of `other` is available here in sufficient quantity
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.get(letter) >= needed)
    }

    /// Raise each count to at least the count in `other`
    pub(crate) fn max_merge(&mut self, other: &Self) {
        for (&letter, &count) in &other.counts {
            let entry = self.counts.entry(letter).or_insert(0);
            *entry = (*entry).max(count);
        }
    }

    /// Spell out the multiset with letters in ascending order
    #[must_use]
    pub fn to_sorted_string(&self) -> String {
        let mut letters: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_unstable_by_key(|&(c, _)| c);

        let mut result = String::with_capacity(self.total());
        for (letter, count) in letters {
            result.extend(std::iter::repeat_n(letter, count));
        }
        result
    }
}

/// Count the letters of a word (case-insensitive)
#[must_use]
pub fn count(word: &str) -> LetterCounts {
    LetterCounts::of(word)
}

/// True iff both words use exactly the same letters the same number of times
#[must_use]
pub fn equals(a: &str, b: &str) -> bool {
    LetterCounts::of(a) == LetterCounts::of(b)
}

/// True iff `word` can be spelled using letters from `pool`
///
/// Both inputs are case-folded. Any character is allowed, but it must be in
/// the pool as often as the word uses it.
///
/// # Examples
/// ```
/// use word_game::core::is_makeable;
///
/// assert!(is_makeable("aabbc", "abc"));
/// assert!(!is_makeable("aabbc", "ccc"));
/// ```
#[must_use]
pub fn is_makeable(pool: &str, word: &str) -> bool {
    LetterCounts::of(pool).covers(&LetterCounts::of(word))
}
