//! Formatting utilities for terminal output

/// Space out the letters of a pool, e.g. `acdgot` -> `a c d g o t`
#[must_use]
pub fn spaced_letters(letters: &str) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, ch) in letters.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// "pt" or "pts"
#[must_use]
pub const fn points_label(points: u32) -> &'static str {
    if points == 1 { "pt" } else { "pts" }
}

/// Remaining and lost lives as hearts
#[must_use]
pub fn lives_hearts(lives: u32, max_lives: u32) -> String {
    let lost = max_lives.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(lives as usize), "♡".repeat(lost))
}

/// Seconds as `m:ss`
#[must_use]
pub fn clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
