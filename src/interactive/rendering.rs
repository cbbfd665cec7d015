//! TUI rendering with ratatui
//!
//! Menu, round and results screens for the word game.

use super::app::{App, Conclusion, MENU, MenuItem, MessageStyle, Screen};
use crate::game::{AnagramRound, ConstructRound, GameMode};
use crate::output::formatters::{clock, lives_hearts, points_label, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match &app.screen {
        Screen::Menu { selected } => render_menu(f, app, *selected, main_chunks[0]),
        Screen::Anagrams(round) => render_anagram_round(f, app, round, main_chunks[0]),
        Screen::Construct(round) => render_construct_round(f, app, round, main_chunks[0]),
        Screen::NameEntry(conclusion) | Screen::Results(conclusion) => {
            render_results(f, conclusion, main_chunks[0]);
        }
        Screen::Dictionary => render_dictionary(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.screen {
        Screen::Anagrams(_) => format!("🔤 WORD GAME - {}", GameMode::Anagrams),
        Screen::Construct(_) => format!("🔤 WORD GAME - {}", GameMode::Construct),
        _ => "🔤 WORD GAME".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn menu_label(app: &App, item: MenuItem) -> String {
    match item {
        MenuItem::Play(mode) => match app.best_for(mode) {
            Some(best) => format!(
                "{mode}  (best: {} {} by {})",
                best.score,
                points_label(best.score),
                best.holder()
            ),
            None => format!("{mode}  (best: unavailable)"),
        },
        MenuItem::ToggleTiming => format!("Mode: {}", app.timing),
        MenuItem::ChangeDictionary => "Change Dictionary".to_string(),
        MenuItem::Quit => "Quit".to_string(),
    }
}

fn render_menu(f: &mut Frame, app: &App, selected: usize, area: Rect) {
    let items: Vec<ListItem> = MENU
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            let label = menu_label(app, item);
            if i == selected {
                ListItem::new(format!("▶ {label}")).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Menu: Select a game mode ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

/// Letters of `base` not yet used by `typed`
fn unused_letters(base: &str, typed: &str) -> String {
    let mut typed: Vec<char> = typed.to_lowercase().chars().collect();
    base.chars()
        .filter(|ch| match typed.iter().position(|t| t == ch) {
            Some(pos) => {
                typed.swap_remove(pos);
                false
            }
            None => true,
        })
        .collect()
}

fn letters_line(letters: &str) -> Line<'static> {
    Line::from(Span::styled(
        spaced_letters(letters).to_uppercase(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn found_lines(found: &[String]) -> Vec<Line<'static>> {
    if found.is_empty() {
        return vec![Line::from(Span::styled(
            "Nothing found yet",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    found
        .chunks(6)
        .map(|row| Line::from(row.join("  ").to_uppercase()))
        .collect()
}

fn render_anagram_round(f: &mut Frame, app: &App, round: &AnagramRound, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let letters = Paragraph::new(vec![
        Line::from(format!("Anagrams of {}:", round.base().to_uppercase())),
        Line::from(""),
        letters_line(&unused_letters(round.base(), &app.input_buffer)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(letters, chunks[0]);

    let found = Paragraph::new(found_lines(round.found()))
        .block(
            Block::default()
                .title(format!(" Found {}/{} ", round.found().len(), round.total()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(found, chunks[1]);
}

fn render_construct_round(f: &mut Frame, app: &App, round: &ConstructRound, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let usable = crate::core::is_makeable(round.pool(), &app.input_buffer);
    let hint = if app.input_buffer.is_empty() || usable {
        Span::raw(format!("Words of {}+ letters", app.config.min_word_len))
    } else {
        Span::styled("Not in the pool!", Style::default().fg(Color::Red))
    };

    let letters = Paragraph::new(vec![
        Line::from(hint),
        Line::from(""),
        letters_line(round.pool()),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Letter Pool ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(letters, chunks[0]);

    let found = Paragraph::new(found_lines(round.found()))
        .block(
            Block::default()
                .title(format!(" Words ({} {}) ", round.score(), points_label(round.score())))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(found, chunks[1]);
}

fn render_results(f: &mut Frame, conclusion: &Conclusion, area: Rect) {
    let summary = &conclusion.summary;
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ({}): ", conclusion.mode, conclusion.timing)),
            Span::styled(
                format!("{} {}", summary.score, points_label(summary.score)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Previous best: {} by {}",
            conclusion.best.score,
            conclusion.best.holder()
        )),
        Line::from(""),
        Line::from(Span::styled("Your answers:", Style::default().fg(Color::Green))),
    ];
    lines.extend(found_lines(&summary.found));

    if !summary.missed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Other answers:",
            Style::default().fg(Color::Cyan),
        )));
        let shown: Vec<String> = summary.missed.iter().take(30).cloned().collect();
        lines.extend(found_lines(&shown));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Round Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_dictionary(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!(
            "Current: {} ({} words)",
            app.lexicon.source(),
            app.lexicon.len()
        )),
        Line::from(""),
        Line::from("Type the path of a word list, one word per line."),
        Line::from("Leave it empty to use the built-in list."),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Change Dictionary ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_timer(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Time ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if let Some(seconds) = app.seconds_left {
        let percent = timer_percent(seconds, app.config.time_limit.as_secs());
        let color = if seconds <= 10 { Color::Red } else { Color::Cyan };

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(color))
            .percent(percent)
            .label(clock(seconds));
        f.render_widget(gauge, area);
    } else {
        f.render_widget(Paragraph::new("∞").alignment(Alignment::Center).block(block), area);
    }
}

/// Share of the countdown left, 0 to 100
fn timer_percent(seconds: u64, limit: u64) -> u16 {
    (seconds.saturating_mul(100) / limit.max(1)).min(100) as u16
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match &app.screen {
        Screen::Menu { .. } => (" ↑/↓ to choose, Enter to select ", Color::DarkGray),
        Screen::Anagrams(_) | Screen::Construct(_) => {
            (" Type a word, Enter to submit | ESC to give up ", Color::Yellow)
        }
        Screen::NameEntry(_) => (" 🎉 New high score! Enter your name ", Color::Green),
        Screen::Results(_) => (" Press Enter to continue ", Color::Cyan),
        Screen::Dictionary => (" Dictionary path | ESC to cancel ", Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.timing)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let (lives, score) = match &app.screen {
        Screen::Anagrams(round) => (Some(round.lives()), Some(round.score())),
        Screen::Construct(round) => (Some(round.lives()), Some(round.score())),
        _ => (None, None),
    };

    let lives_text = lives.map_or_else(
        || format!("Rounds: {}", app.stats.rounds_played),
        |lives| format!("Lives: {}", lives_hearts(lives, app.config.lives)),
    );
    let lives = Paragraph::new(lives_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    f.render_widget(lives, chunks[1]);

    let score_text = score.map_or_else(
        || format!("Total: {} {}", app.stats.total_points, points_label(app.stats.total_points)),
        |score| format!("Score: {score}"),
    );
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let dictionary = Paragraph::new(format!("{} words", app.lexicon.len()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(dictionary, chunks[3]);
}
