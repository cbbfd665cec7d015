//! The word list a game session plays with
//!
//! A [`Lexicon`] is loaded wholesale and never edited; switching
//! dictionaries replaces the whole value.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::error::Result;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// An ordered word list with case-insensitive membership
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<String>,
    index: FxHashSet<String>,
    source: String,
}

impl Lexicon {
    /// Build a lexicon from in-memory words, keeping their order
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(words.into_iter().map(Into::into).collect(), "memory")
    }

    fn with_source(words: Vec<String>, source: impl Into<String>) -> Self {
        let index = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            words,
            index,
            source: source.into(),
        }
    }

    /// The default dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::with_source(loader::words_from_slice(DEFAULT_WORDS), "built-in")
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SourceNotFound`](crate::error::GameError::SourceNotFound)
    /// if the file does not exist, or an I/O error if it cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = loader::read_words(path)?;
        debug!(path = %path.display(), words = words.len(), "loaded dictionary");
        Ok(Self::with_source(words, path.display().to_string()))
    }

    /// Replace this lexicon with the contents of `path`
    ///
    /// On failure the current word list stays in place.
    ///
    /// # Errors
    ///
    /// Same as [`Lexicon::load`].
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Where the words came from: a file path, `built-in` or `memory`
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}
