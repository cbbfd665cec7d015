//! Simple text console mode
//!
//! Line-based front end: a menu, both game modes without a timer, and
//! dictionary switching. Rounds use the untimed high-score slots.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{
    AnagramOutcome, AnagramRound, ConstructOutcome, ConstructRound, GameMode, Timing,
    pick_anagram_set, random_pool,
};
use crate::highscore::{HighScoreStore, Slot};
use crate::lexicon::Lexicon;
use crate::output::formatters::{points_label, spaced_letters};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple console mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the high-score file
/// cannot be written.
pub fn run_simple(lexicon: Lexicon, store: &HighScoreStore, config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), lexicon, store, config);
    console.run(&mut rand::rng())
}

/// A console game session over any line input and text output
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    lexicon: Lexicon,
    store: &'a HighScoreStore,
    config: &'a GameConfig,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    #[must_use]
    pub fn new(
        input: R,
        output: W,
        lexicon: Lexicon,
        store: &'a HighScoreStore,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            input,
            output,
            lexicon,
            store,
            config,
        }
    }

    /// Main menu loop; returns when the player exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or an unwritable high-score file.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        writeln!(self.output, "\n{}", "═".repeat(40).bright_cyan())?;
        writeln!(self.output, "{}", "  W O R D   G A M E !".bright_green().bold())?;
        writeln!(self.output, "{}", "═".repeat(40).bright_cyan())?;
        writeln!(
            self.output,
            "Dictionary: {} ({} words)",
            self.lexicon.source(),
            self.lexicon.len()
        )?;

        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.as_str() {
                "1" => self.play(GameMode::Anagrams, rng)?,
                "2" => self.play(GameMode::Construct, rng)?,
                "3" => self.select_dictionary()?,
                "0" | "q" | "quit" | "exit" => break,
                _ => writeln!(self.output, "{}", "Invalid!".red())?,
            }
        }

        writeln!(self.output, "\nThanks for playing!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(10))?;
        writeln!(self.output, "Enter game mode! High scores are:")?;

        let mut bests = Vec::with_capacity(GameMode::ALL.len());
        for mode in GameMode::ALL {
            match self.store.get(Slot::for_game(mode, Timing::Untimed)) {
                Ok(best) => bests.push(format!(
                    "{}: {} with {}",
                    mode,
                    best.holder(),
                    best.score
                )),
                Err(e) => bests.push(format!("{mode}: unavailable ({e})")),
            }
        }
        writeln!(self.output, "{}", bests.join(" | "))?;

        for (i, mode) in GameMode::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, mode)?;
        }
        writeln!(self.output, "3. Change Dictionary")?;
        writeln!(self.output, "0. Exit")?;
        Ok(())
    }

    fn play<G: Rng + ?Sized>(&mut self, mode: GameMode, rng: &mut G) -> Result<()> {
        writeln!(self.output, "You chose {mode}")?;
        writeln!(self.output, "(enter an empty line to end the round)")?;

        let score = match mode {
            GameMode::Anagrams => self.play_anagrams(rng)?,
            GameMode::Construct => self.play_construct(rng)?,
        };

        if let Some(score) = score {
            self.conclude(mode, score)?;
        }
        Ok(())
    }

    fn play_anagrams<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Option<u32>> {
        let set = match pick_anagram_set(
            &self.lexicon,
            self.config.min_anagrams,
            self.config.max_attempts,
            rng,
        ) {
            Ok(set) => set,
            Err(e @ GameError::NoSuitableWord { .. }) => {
                writeln!(self.output, "{}", format!("{e}. Try another dictionary.").red())?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut round = AnagramRound::new(set, self.config.lives);
        writeln!(self.output, "Find the anagrams of:")?;

        while !round.is_over() {
            writeln!(self.output, "=={}==", round.base())?;
            let Some(answer) = self.read_line()? else {
                break;
            };
            if answer.is_empty() {
                break;
            }

            let outcome = round.guess(&answer);
            match outcome {
                AnagramOutcome::Correct => {
                    writeln!(self.output, "{}", format!("Score {}", round.score()).green())?;
                }
                AnagramOutcome::NotInDictionary => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("{} Lives: {}", outcome.message(), round.lives()).red()
                    )?;
                }
                _ => writeln!(self.output, "{}", outcome.message())?,
            }
        }

        let summary = round.finish();
        if !summary.missed.is_empty() {
            let label = if summary.score > 0 {
                "Other answers are:"
            } else {
                "Answers are:"
            };
            writeln!(self.output, "{label} {}", summary.missed.join(" "))?;
        }
        Ok(Some(summary.score))
    }

    fn play_construct<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Option<u32>> {
        let pool = match random_pool(&self.lexicon, self.config.pool_words, rng) {
            Ok((_, pool)) => pool,
            Err(e @ GameError::EmptyInput) => {
                writeln!(self.output, "{}", format!("{e}. Try another dictionary.").red())?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut round = ConstructRound::new(pool, self.config.lives, self.config.min_word_len);
        writeln!(self.output, "Enter words using these letters:")?;

        while !round.is_over() {
            writeln!(self.output, "=={}==", spaced_letters(round.pool()))?;
            let Some(answer) = self.read_line()? else {
                break;
            };
            if answer.is_empty() {
                break;
            }

            match round.guess(&self.lexicon, &answer) {
                Ok(ConstructOutcome::Accepted { points }) => writeln!(
                    self.output,
                    "{}",
                    format!("+{points} {}! Score: {}", points_label(points), round.score())
                        .green()
                )?,
                Ok(outcome @ ConstructOutcome::NotInDictionary) => writeln!(
                    self.output,
                    "{}",
                    format!("{} Lives: {}", outcome.message(), round.lives()).red()
                )?,
                Ok(outcome) => writeln!(self.output, "{}", outcome.message())?,
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }

        let summary = round.finish(&self.lexicon);
        if !summary.missed.is_empty() {
            let shown: Vec<&str> = summary.missed.iter().take(10).map(String::as_str).collect();
            writeln!(self.output, "Some words you missed: {}", shown.join(" "))?;
        }
        Ok(Some(summary.score))
    }

    fn conclude(&mut self, mode: GameMode, score: u32) -> Result<()> {
        let slot = Slot::for_game(mode, Timing::Untimed);
        writeln!(self.output, "{}", "=".repeat(10))?;

        let new_best = match self.store.is_new_best(slot, score) {
            Ok(new_best) => new_best,
            Err(e) => {
                writeln!(self.output, "You got {score} {}!", points_label(score))?;
                writeln!(self.output, "{}", format!("High scores unavailable: {e}").red())?;
                return Ok(());
            }
        };

        if new_best {
            writeln!(
                self.output,
                "{}",
                format!("New high score! You got {score} {}!", points_label(score))
                    .bright_yellow()
                    .bold()
            )?;
            write!(self.output, "Enter your name: ")?;
            self.output.flush()?;
            let name = self.read_line()?.unwrap_or_default();
            self.store
                .set(slot, &name, score)
                .with_context(|| format!("saving high score to {}", self.store.path().display()))?;
            info!(%mode, score, "new high score");
        } else {
            let best = self.store.get(slot).unwrap_or_default();
            writeln!(self.output, "You got {score} {}!", points_label(score))?;
            writeln!(
                self.output,
                "The high score is {} by {}",
                best.score,
                best.holder()
            )?;
        }
        Ok(())
    }

    fn select_dictionary(&mut self) -> Result<()> {
        loop {
            write!(
                self.output,
                "Enter dictionary filename: (or press enter for the built-in list) "
            )?;
            self.output.flush()?;

            let Some(path) = self.read_line()? else {
                return Ok(());
            };
            if path.is_empty() {
                self.lexicon = Lexicon::embedded();
                break;
            }

            match self.lexicon.reload(&path) {
                Ok(()) => break,
                Err(GameError::SourceNotFound { .. }) => {
                    writeln!(self.output, "{}", "File not found!".red())?;
                }
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }

        writeln!(
            self.output,
            "Loaded {} words from {}",
            self.lexicon.len(),
            self.lexicon.source()
        )?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
