//! Dictionary file loading

use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Read the words of a dictionary file, one per line
///
/// Words are kept exactly as written (no case folding, trimming or
/// de-duplication); only line terminators and empty lines are dropped.
///
/// # Errors
///
/// Returns [`GameError::SourceNotFound`] if the file does not exist and
/// [`GameError::Io`] for any other read failure.
///
/// # Examples
/// ```no_run
/// use word_game::lexicon::loader::read_words;
///
/// let words = read_words("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GameError::from_io(path, e))?;
    Ok(parse_words(&content))
}

/// Split dictionary text into words
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
