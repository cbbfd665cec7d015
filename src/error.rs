//! Error types for the game engine
//!
//! Routine gameplay outcomes ("not an anagram", "not in the dictionary") are
//! never errors; they are reported through booleans and outcome enums.

use std::path::PathBuf;

/// Result type defaulting to [`GameError`]
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors raised by the game engine
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A dictionary file does not exist
    #[error("file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The high-score file exists but is not a list of name/score pairs
    #[error("malformed high-score record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A player name that cannot be stored in the line-oriented format
    #[error("player name must not contain line breaks")]
    InvalidName,

    /// A character with no entry in the score table
    #[error("cannot score {letter:?} in {word:?}: not a letter a-z")]
    UnknownLetter { letter: char, word: String },

    /// Nothing to draw from or combine
    #[error("no words to work with")]
    EmptyInput,

    /// The anagram search ran out of attempts
    #[error("no word with at least {min_anagrams} anagrams found after {attempts} attempts")]
    NoSuitableWord { min_anagrams: usize, attempts: usize },
}

impl GameError {
    /// Wrap an I/O error, mapping `NotFound` to [`GameError::SourceNotFound`]
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
