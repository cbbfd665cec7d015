//! Word Game
//!
//! Two word puzzles played against a dictionary: find every anagram of a
//! random word, or build words from a pool of letters taken from two random
//! words. Words are scored with Scrabble letter values and the best score of
//! each mode is kept on disk.
//!
//! # Quick Start
//!
//! ```rust
//! use word_game::core::{is_makeable, score_of};
//! use word_game::game::{combine, find_anagrams};
//! use word_game::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["listen", "silent", "enlist", "cat"]);
//! assert_eq!(find_anagrams(&lexicon, "listen"), vec!["silent", "enlist"]);
//!
//! let pool = combine(&["cat", "dog"]).unwrap();
//! assert_eq!(pool, "acdgot");
//! assert!(is_makeable(&pool, "goat"));
//! assert_eq!(score_of("goat").unwrap(), 5);
//! ```

// Letter counting and scoring
pub mod core;

// Error types
pub mod error;

// Gameplay settings
pub mod config;

// Dictionaries
pub mod lexicon;

// Game modes and round rules
pub mod game;

// High-score persistence
pub mod highscore;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
