//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{
    AnagramOutcome, AnagramRound, ConstructOutcome, ConstructRound, GameMode, RoundSummary,
    Timing, pick_anagram_set, random_pool,
};
use crate::highscore::{HighScore, HighScoreStore, Slot};
use crate::lexicon::Lexicon;
use crate::output::formatters::points_label;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Longest name accepted for the high-score table
pub const MAX_NAME_LEN: usize = 12;

/// Entries of the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(GameMode),
    ToggleTiming,
    ChangeDictionary,
    Quit,
}

pub const MENU: [MenuItem; 5] = [
    MenuItem::Play(GameMode::Anagrams),
    MenuItem::Play(GameMode::Construct),
    MenuItem::ToggleTiming,
    MenuItem::ChangeDictionary,
    MenuItem::Quit,
];

/// A finished round waiting to be shown or recorded
#[derive(Debug, Clone)]
pub struct Conclusion {
    pub mode: GameMode,
    pub timing: Timing,
    pub summary: RoundSummary,
    /// Record before this round
    pub best: HighScore,
}

/// What the screen currently shows
#[derive(Debug, Clone)]
pub enum Screen {
    Menu { selected: usize },
    Anagrams(AnagramRound),
    Construct(ConstructRound),
    NameEntry(Conclusion),
    Results(Conclusion),
    Dictionary,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub total_points: u32,
}

/// Application state
pub struct App {
    pub lexicon: Lexicon,
    pub store: HighScoreStore,
    pub config: GameConfig,
    pub timing: Timing,
    pub screen: Screen,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub seconds_left: Option<u64>,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    #[must_use]
    pub fn new(lexicon: Lexicon, store: HighScoreStore, config: GameConfig, timing: Timing) -> Self {
        Self {
            lexicon,
            store,
            config,
            timing,
            screen: Screen::Menu { selected: 0 },
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Select a game mode.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            seconds_left: None,
            should_quit: false,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Use a fixed seed for word selection
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// High score for a mode under the current timing
    #[must_use]
    pub fn best_for(&self, mode: GameMode) -> Option<HighScore> {
        self.store.get(Slot::for_game(mode, self.timing)).ok()
    }

    pub fn start_round(&mut self, mode: GameMode) {
        self.input_buffer.clear();

        let started = match mode {
            GameMode::Anagrams => pick_anagram_set(
                &self.lexicon,
                self.config.min_anagrams,
                self.config.max_attempts,
                &mut self.rng,
            )
            .map(|set| Screen::Anagrams(AnagramRound::new(set, self.config.lives))),
            GameMode::Construct => {
                random_pool(&self.lexicon, self.config.pool_words, &mut self.rng).map(|(_, pool)| {
                    Screen::Construct(ConstructRound::new(
                        pool,
                        self.config.lives,
                        self.config.min_word_len,
                    ))
                })
            }
        };

        match started {
            Ok(screen) => {
                self.screen = screen;
                self.seconds_left = match self.timing {
                    Timing::Timed => Some(self.config.time_limit.as_secs()),
                    Timing::Untimed => None,
                };
                self.messages.clear();
                let hint = match mode {
                    GameMode::Anagrams => "Find all the possible anagrams!",
                    GameMode::Construct => "Make words from these letters!",
                };
                self.add_message(hint, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Enter pressed on the current screen
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match &mut self.screen {
            Screen::Menu { selected } => {
                let item = MENU[*selected];
                self.activate(item);
            }
            Screen::Anagrams(round) => {
                if input.trim().is_empty() {
                    return;
                }
                let outcome = round.guess(&input);
                let over = round.is_over();
                let style = match outcome {
                    AnagramOutcome::Correct => MessageStyle::Success,
                    AnagramOutcome::NotInDictionary => MessageStyle::Error,
                    _ => MessageStyle::Info,
                };
                self.add_message(outcome.message(), style);
                if over {
                    self.end_round();
                }
            }
            Screen::Construct(round) => {
                if input.trim().is_empty() {
                    return;
                }
                let result = round.guess(&self.lexicon, &input);
                let over = round.is_over();
                match result {
                    Ok(ConstructOutcome::Accepted { points }) => self.add_message(
                        &format!("Correct! +{points} {}", points_label(points)),
                        MessageStyle::Success,
                    ),
                    Ok(outcome @ ConstructOutcome::NotInDictionary) => {
                        self.add_message(outcome.message(), MessageStyle::Error);
                    }
                    Ok(outcome) => self.add_message(outcome.message(), MessageStyle::Info),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
                if over {
                    self.end_round();
                }
            }
            Screen::NameEntry(_) => self.save_name(&input),
            Screen::Results(_) => self.back_to_menu(),
            Screen::Dictionary => self.load_dictionary(&input),
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Play(mode) => self.start_round(mode),
            MenuItem::ToggleTiming => {
                self.timing = self.timing.toggled();
                self.add_message(&format!("{} mode", self.timing), MessageStyle::Info);
            }
            MenuItem::ChangeDictionary => {
                self.input_buffer.clear();
                self.screen = Screen::Dictionary;
                self.add_message(
                    "Type a dictionary path (empty for the built-in list)",
                    MessageStyle::Info,
                );
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    /// One second of the countdown has passed
    pub fn tick(&mut self) {
        if !matches!(self.screen, Screen::Anagrams(_) | Screen::Construct(_)) {
            return;
        }
        if let Some(seconds) = self.seconds_left.as_mut() {
            *seconds = seconds.saturating_sub(1);
            if *seconds == 0 {
                self.add_message("Time's up!", MessageStyle::Info);
                self.end_round();
            }
        }
    }

    /// Stop the current round and move on to the results
    pub fn end_round(&mut self) {
        let (mode, summary) = match std::mem::replace(&mut self.screen, Screen::Menu { selected: 0 })
        {
            Screen::Anagrams(round) => (GameMode::Anagrams, round.finish()),
            Screen::Construct(round) => (GameMode::Construct, round.finish(&self.lexicon)),
            other => {
                self.screen = other;
                return;
            }
        };
        self.seconds_left = None;
        self.input_buffer.clear();
        self.stats.rounds_played += 1;
        self.stats.total_points += summary.score;

        let slot = Slot::for_game(mode, self.timing);
        let score = summary.score;
        let new_best = match self.store.is_new_best(slot, score) {
            Ok(new_best) => new_best,
            Err(e) => {
                self.add_message(&format!("High scores unavailable: {e}"), MessageStyle::Error);
                self.screen = Screen::Results(Conclusion {
                    mode,
                    timing: self.timing,
                    summary,
                    best: HighScore::default(),
                });
                return;
            }
        };

        let conclusion = Conclusion {
            mode,
            timing: self.timing,
            summary,
            best: self.store.get(slot).unwrap_or_default(),
        };
        if new_best {
            self.add_message(
                &format!("New high score: {score} {}! Enter your name", points_label(score)),
                MessageStyle::Success,
            );
            self.screen = Screen::NameEntry(conclusion);
        } else {
            self.add_message(
                &format!("You got {score} {}!", points_label(score)),
                MessageStyle::Info,
            );
            self.screen = Screen::Results(conclusion);
        }
    }

    fn save_name(&mut self, name: &str) {
        let Screen::NameEntry(conclusion) =
            std::mem::replace(&mut self.screen, Screen::Menu { selected: 0 })
        else {
            return;
        };

        let slot = Slot::for_game(conclusion.mode, conclusion.timing);
        match self.store.set(slot, name.trim(), conclusion.summary.score) {
            Ok(()) => {
                info!(mode = %conclusion.mode, score = conclusion.summary.score, "new high score");
                self.add_message("High score saved!", MessageStyle::Success);
            }
            Err(e) => self.add_message(&format!("Could not save: {e}"), MessageStyle::Error),
        }
        self.screen = Screen::Results(conclusion);
    }

    fn load_dictionary(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.lexicon = Lexicon::embedded();
        } else if let Err(e) = self.lexicon.reload(path) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        self.add_message(
            &format!("Loaded {} words from {}", self.lexicon.len(), self.lexicon.source()),
            MessageStyle::Success,
        );
        self.screen = Screen::Menu { selected: 0 };
    }

    pub fn back_to_menu(&mut self) {
        self.input_buffer.clear();
        self.seconds_left = None;
        self.screen = Screen::Menu { selected: 0 };
    }

    /// Route a key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected = (*selected + MENU.len() - 1) % MENU.len();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *selected = (*selected + 1) % MENU.len();
                }
                KeyCode::Char('1') => self.start_round(GameMode::Anagrams),
                KeyCode::Char('2') => self.start_round(GameMode::Construct),
                KeyCode::Char('t') => self.activate(MenuItem::ToggleTiming),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Screen::Anagrams(_) | Screen::Construct(_) => match key.code {
                // Giving up still counts the score so far
                KeyCode::Esc => self.end_round(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if c.is_alphabetic() || c == '\'' || c == '-' => {
                    self.input_buffer.extend(c.to_lowercase());
                }
                _ => {}
            },
            Screen::NameEntry(_) => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if self.input_buffer.chars().count() < MAX_NAME_LEN => {
                    self.input_buffer.push(c);
                }
                _ => {}
            },
            Screen::Results(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.back_to_menu();
                }
            }
            Screen::Dictionary => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            let was_playing = app.seconds_left.is_some();
            app.handle_key(key);
            // A fresh countdown starts a full second from now
            if !was_playing && app.seconds_left.is_some() {
                last_tick = Instant::now();
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
