//! Scrabble letter scoring

use crate::error::{GameError, Result};

/// Point value of each letter `a`..=`z` (standard English Scrabble tiles)
pub const SCORE_TABLE: [u32; 26] = [
    1,  // a
    3,  // b
    3,  // c
    2,  // d
    1,  // e
    4,  // f
    2,  // g
    4,  // h
    1,  // i
    8,  // j
    5,  // k
    1,  // l
    3,  // m
    1,  // n
    1,  // o
    3,  // p
    10, // q
    1,  // r
    1,  // s
    1,  // t
    1,  // u
    4,  // v
    4,  // w
    8,  // x
    4,  // y
    10, // z
];

/// Points for a single letter, or `None` if it has no table entry
///
/// Upper-case ASCII letters are folded first.
#[inline]
#[must_use]
pub fn letter_score(letter: char) -> Option<u32> {
    let letter = letter.to_ascii_lowercase();
    if letter.is_ascii_lowercase() {
        Some(SCORE_TABLE[(letter as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Sum of the letter scores of `word`
///
/// # Errors
///
/// Returns [`GameError::UnknownLetter`] if `word` contains anything other
/// than the letters `a`-`z` (in either case). Nothing is stripped.
///
/// # Examples
/// ```
/// use word_game::core::score_of;
///
/// assert_eq!(score_of("cab").unwrap(), 7);
/// assert!(score_of("c-a-b").is_err());
/// ```
pub fn score_of(word: &str) -> Result<u32> {
    word.chars().try_fold(0, |total, letter| {
        letter_score(letter)
            .map(|points| total + points)
            .ok_or_else(|| GameError::UnknownLetter {
                letter,
                word: word.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_simple_word() {
        assert_eq!(score_of("cab").unwrap(), 7);
        assert_eq!(score_of("quiz").unwrap(), 22);
    }

    #[test]
    fn scoring_folds_case() {
        assert_eq!(score_of("CaB").unwrap(), score_of("cab").unwrap());
    }

    #[test]
    fn empty_word_scores_zero() {
        assert_eq!(score_of("").unwrap(), 0);
    }

    #[test]
    fn table_matches_scrabble_groups() {
        for letter in "eaionrtlsu".chars() {
            assert_eq!(letter_score(letter), Some(1), "{letter}");
        }
        for letter in "dg".chars() {
            assert_eq!(letter_score(letter), Some(2), "{letter}");
        }
        for letter in "bcmp".chars() {
            assert_eq!(letter_score(letter), Some(3), "{letter}");
        }
        for letter in "fhvwy".chars() {
            assert_eq!(letter_score(letter), Some(4), "{letter}");
        }
        assert_eq!(letter_score('k'), Some(5));
        assert_eq!(letter_score('j'), Some(8));
        assert_eq!(letter_score('x'), Some(8));
        assert_eq!(letter_score('q'), Some(10));
        assert_eq!(letter_score('z'), Some(10));
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(
            score_of("don't"),
            Err(GameError::UnknownLetter { letter: '\'', .. })
        ));
        assert!(matches!(
            score_of("café"),
            Err(GameError::UnknownLetter { letter: 'é', .. })
        ));
        assert_eq!(letter_score(' '), None);
    }
}
