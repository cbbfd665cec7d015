//! Word Game - CLI
//!
//! Anagram and word-construction puzzles with a TUI, a text console and
//! one-shot lookup commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use word_game::{
    commands::{build_pool, lookup_anagrams, run_simple, run_survey, score_words},
    config::GameConfig,
    game::Timing,
    highscore::{DEFAULT_SCORES_FILE, HighScoreStore},
    lexicon::Lexicon,
    output::{
        print_anagram_lookup, print_high_scores, print_pool_report, print_scored_words,
        print_survey,
    },
};

#[derive(Parser)]
#[command(
    name = "word_game",
    about = "Anagram and word-construction puzzles with Scrabble scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// High-score file
    #[arg(long, global = true, default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start without the countdown
        #[arg(long)]
        untimed: bool,

        /// Seconds per timed round (1 to 86400)
        #[arg(short, long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..=86_400))]
        time_limit: u64,
    },

    /// Simple text console (untimed)
    Simple,

    /// List the anagrams of a word
    Anagrams {
        /// Word to look up
        word: String,
    },

    /// Score words with the Scrabble letter values
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Combine words into a letter pool
    Pool {
        /// Words to combine
        #[arg(required = true)]
        words: Vec<String>,

        /// Also list every dictionary word the pool can make
        #[arg(short, long)]
        list: bool,
    },

    /// Show the high-score table
    Scores,

    /// Survey the dictionary for anagram families
    Survey {
        /// Anagrams a base word needs
        #[arg(short, long, default_value = "2")]
        min: usize,

        /// Number of largest families to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Load the lexicon named by -d, or the built-in list
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => Ok(Lexicon::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let lexicon = load_lexicon(cli.dictionary.as_deref())?;
    debug!(words = lexicon.len(), source = lexicon.source(), "dictionary ready");

    let store = HighScoreStore::new(&cli.scores);
    let config = GameConfig::default();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        untimed: false,
        time_limit: config.time_limit.as_secs(),
    });

    match command {
        Commands::Play {
            untimed,
            time_limit,
        } => run_play_command(lexicon, store, config, untimed, time_limit),
        Commands::Simple => run_simple(lexicon, &store, &config),
        Commands::Anagrams { word } => {
            print_anagram_lookup(&lookup_anagrams(&lexicon, &word));
            Ok(())
        }
        Commands::Score { words } => {
            print_scored_words(&score_words(&words));
            Ok(())
        }
        Commands::Pool { words, list } => {
            let report = build_pool(&lexicon, &words, list, config.min_word_len)?;
            print_pool_report(&report, list);
            Ok(())
        }
        Commands::Scores => {
            let records = store
                .all()
                .with_context(|| format!("Failed to read {}", store.path().display()))?;
            print_high_scores(&records);
            Ok(())
        }
        Commands::Survey { min, top } => {
            let stats = run_survey(&lexicon, min, config.max_attempts, top);
            print_survey(&stats);
            Ok(())
        }
    }
}

fn run_play_command(
    lexicon: Lexicon,
    store: HighScoreStore,
    config: GameConfig,
    untimed: bool,
    time_limit: u64,
) -> Result<()> {
    use word_game::interactive::{App, run_tui};

    let config = GameConfig {
        time_limit: Duration::from_secs(time_limit),
        ..config
    };
    let timing = if untimed {
        Timing::Untimed
    } else {
        Timing::Timed
    };
    run_tui(App::new(lexicon, store, config, timing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_limit_must_be_in_range() {
        assert!(Cli::try_parse_from(["word_game", "play", "--time-limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["word_game", "play", "--time-limit", "86401"]).is_err());
        assert!(
            Cli::try_parse_from(["word_game", "play", "--time-limit", "18446744073709551615"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["word_game", "play", "--time-limit", "90"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Play {
                time_limit: 90,
                untimed: false
            })
        ));
    }
}
