//! Line-oriented high-score file

use super::{HighScore, Slot};
use crate::error::{GameError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// File name used when no path is configured
pub const DEFAULT_SCORES_FILE: &str = ".word_game_scores";

/// Written in place of an unset name
const NO_NAME: &str = "None";

/// Parse the record file into ordered `(name, score)` records
///
/// An empty file has no records. A single trailing newline is allowed.
///
/// # Errors
///
/// Returns [`GameError::MalformedRecord`] if a name has no score line or a
/// score is not a non-negative decimal integer.
pub fn parse_records(content: &str) -> Result<Vec<HighScore>> {
    let content = content
        .strip_suffix('\n')
        .map_or(content, |rest| rest.strip_suffix('\r').unwrap_or(rest));
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() % 2 != 0 {
        return Err(GameError::MalformedRecord {
            line: lines.len(),
            reason: "name without a score".to_string(),
        });
    }

    lines
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let score = pair[1]
                .parse::<u32>()
                .map_err(|_| GameError::MalformedRecord {
                    line: 2 * i + 2,
                    reason: format!("score {:?} is not a non-negative integer", pair[1]),
                })?;
            let name = (pair[0] != NO_NAME).then(|| pair[0].to_string());
            Ok(HighScore { name, score })
        })
        .collect()
}

/// Render records in the on-disk format (no trailing newline)
#[must_use]
pub fn format_records(records: &[HighScore]) -> String {
    records
        .iter()
        .flat_map(|record| {
            [
                record.name.clone().unwrap_or_else(|| NO_NAME.to_string()),
                record.score.to_string(),
            ]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// High scores backed by one file
///
/// Every call reads the file afresh; `set` rewrites it in full. A single
/// game process is assumed to own the file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where scores are kept when no path is configured
    #[must_use]
    pub fn default_path() -> &'static Path {
        Path::new(DEFAULT_SCORES_FILE)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records currently on disk; none if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read, or
    /// [`GameError::MalformedRecord`] if it cannot be parsed.
    pub fn all(&self) -> Result<Vec<HighScore>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_records(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(GameError::from_io(&self.path, e)),
        }
    }

    /// The record in `slot`, or an unset zero score if there is none
    ///
    /// Nothing is written, even when the file is missing.
    ///
    /// # Errors
    ///
    /// Same as [`HighScoreStore::all`].
    pub fn get(&self, slot: Slot) -> Result<HighScore> {
        Ok(self
            .all()?
            .into_iter()
            .nth(slot.index())
            .unwrap_or_default())
    }

    /// True if `score` beats the record in `slot`
    ///
    /// # Errors
    ///
    /// Same as [`HighScoreStore::all`].
    pub fn is_new_best(&self, slot: Slot, score: u32) -> Result<bool> {
        Ok(score > self.get(slot)?.score)
    }

    /// Overwrite `slot`, leaving every other record untouched
    ///
    /// Missing records before `slot` are filled with unset zero scores. The
    /// name is stored as given, except that an empty or all-whitespace name
    /// is stored as unset. The file is replaced atomically.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` contains a line break,
    /// [`GameError::MalformedRecord`] if the existing file is corrupt, or an
    /// I/O error if reading or writing fails.
    pub fn set(&self, slot: Slot, name: &str, score: u32) -> Result<()> {
        if name.contains(['\n', '\r']) {
            return Err(GameError::InvalidName);
        }
        let mut records = self.all()?;
        if records.len() <= slot.index() {
            records.resize(slot.index() + 1, HighScore::default());
        }
        records[slot.index()] = HighScore {
            name: (!name.trim().is_empty()).then(|| name.to_string()),
            score,
        };

        self.write(&format_records(&records))?;
        debug!(%slot, score, path = %self.path.display(), "saved high score");
        Ok(())
    }

    fn write(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |source: io::Error| GameError::Io {
            path: self.path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("scores"))
    }

    #[test]
    fn get_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for index in [0, 1, 5] {
            assert_eq!(store.get(Slot::new(index)).unwrap(), HighScore::default());
        }
        assert!(!store.path().exists(), "reading must not create the file");
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(1), "Amy", 42).unwrap();
        assert_eq!(store.get(Slot::new(1)).unwrap(), HighScore::new("Amy", 42));
        assert_eq!(store.get(Slot::new(0)).unwrap(), HighScore::default());
    }

    #[test]
    fn set_leaves_other_slots_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(0), "Bob", 7).unwrap();
        store.set(Slot::new(3), "Cy", 19).unwrap();
        store.set(Slot::new(1), "Amy", 42).unwrap();

        assert_eq!(store.get(Slot::new(0)).unwrap(), HighScore::new("Bob", 7));
        assert_eq!(store.get(Slot::new(1)).unwrap(), HighScore::new("Amy", 42));
        assert_eq!(store.get(Slot::new(2)).unwrap(), HighScore::default());
        assert_eq!(store.get(Slot::new(3)).unwrap(), HighScore::new("Cy", 19));
    }

    #[test]
    fn set_pads_gap_with_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(2), "Amy", 42).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "None\n0\nNone\n0\nAmy\n42");
    }

    #[test]
    fn short_file_returns_default_for_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Amy\n42").unwrap();

        assert_eq!(store.get(Slot::new(0)).unwrap(), HighScore::new("Amy", 42));
        assert_eq!(store.get(Slot::new(3)).unwrap(), HighScore::default());
    }

    #[test]
    fn reads_files_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "None\n0\nAmy\n42\n").unwrap();

        assert_eq!(store.get(Slot::new(1)).unwrap(), HighScore::new("Amy", 42));
    }

    #[test]
    fn overwriting_replaces_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(0), "Amy", 42).unwrap();
        store.set(Slot::new(0), "Bob", 50).unwrap();
        assert_eq!(store.get(Slot::new(0)).unwrap(), HighScore::new("Bob", 50));
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn blank_name_is_stored_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(0), "   ", 3).unwrap();
        let record = store.get(Slot::new(0)).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.score, 3);
    }

    #[test]
    fn name_is_stored_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Slot::new(0), "  Amy ", 3).unwrap();
        assert_eq!(store.get(Slot::new(0)).unwrap(), HighScore::new("  Amy ", 3));
    }

    #[test]
    fn name_with_newline_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.set(Slot::new(0), "Amy\n99", 1),
            Err(GameError::InvalidName)
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn new_best_must_beat_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.is_new_best(Slot::new(0), 1).unwrap());
        assert!(!store.is_new_best(Slot::new(0), 0).unwrap());

        store.set(Slot::new(0), "Amy", 10).unwrap();
        assert!(!store.is_new_best(Slot::new(0), 10).unwrap());
        assert!(store.is_new_best(Slot::new(0), 11).unwrap());
    }

    #[test]
    fn odd_line_count_is_malformed() {
        assert!(matches!(
            parse_records("Amy\n42\nBob"),
            Err(GameError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn bad_score_is_malformed() {
        assert!(matches!(
            parse_records("Amy\nlots"),
            Err(GameError::MalformedRecord { line: 2, .. })
        ));
        assert!(matches!(
            parse_records("None\n0\nAmy\n-4"),
            Err(GameError::MalformedRecord { line: 4, .. })
        ));
    }

    #[test]
    fn malformed_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "garbage").unwrap();

        assert!(store.get(Slot::new(0)).is_err());
        assert!(store.set(Slot::new(0), "Amy", 1).is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "garbage");
    }

    #[test]
    fn empty_file_has_no_records() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("\n").unwrap().is_empty());
    }

    #[test]
    fn none_reads_as_unset() {
        let records = parse_records("None\n0\r\nAmy\r\n5").unwrap();
        assert_eq!(records, vec![HighScore::default(), HighScore::new("Amy", 5)]);
    }

    #[test]
    fn format_matches_parse() {
        let records = vec![HighScore::default(), HighScore::new("Amy", 42)];
        let text = format_records(&records);
        assert_eq!(text, "None\n0\nAmy\n42");
        assert_eq!(parse_records(&text).unwrap(), records);
    }

    #[test]
    fn default_store_uses_default_file() {
        assert_eq!(HighScoreStore::default().path(), HighScoreStore::default_path());
        assert_eq!(HighScoreStore::default_path(), Path::new(DEFAULT_SCORES_FILE));
    }
}
