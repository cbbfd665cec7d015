//! Display functions for command results

use super::formatters::{create_progress_bar, points_label, spaced_letters};
use crate::commands::{AnagramLookup, PoolReport, ScoredWord, SurveyStatistics};
use crate::game::{GameMode, Timing};
use crate::highscore::{HighScore, Slot};
use colored::Colorize;

/// Print the anagrams of a word
pub fn print_anagram_lookup(result: &AnagramLookup) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of: {}",
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_lexicon {
        println!("{}", "(not itself in the dictionary)".bright_black());
    }

    if result.anagrams.is_empty() {
        println!("\n{}", "No anagrams found.".yellow());
    } else {
        println!();
        for anagram in &result.anagrams {
            println!("  • {anagram}");
        }
        println!(
            "\n{}",
            format!("✅ {} anagram(s)", result.anagrams.len()).green().bold()
        );
    }
}

/// Print word scores, one per line
pub fn print_scored_words(words: &[ScoredWord]) {
    for scored in words {
        if let Some(e) = scored.error() {
            println!("  {:<20} {}", scored.word, e.to_string().red());
        } else {
            let points = scored.points();
            println!(
                "  {:<20} {}",
                scored.word,
                format!("{points} {}", points_label(points)).bright_yellow()
            );
        }
    }
}

/// Print a combined pool and what it can spell
pub fn print_pool_report(report: &PoolReport, list: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POOL:".bright_cyan().bold(),
        spaced_letters(&report.pool).to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n   From words:  {}", report.words.join(", "));
    println!("   Letters:     {}", report.pool.chars().count());

    if list {
        let best = report.makeable.first().map_or(0, |(_, score)| *score);
        println!(
            "\n📖 {} ({} words)",
            "Makeable words:".bright_cyan().bold(),
            report.makeable.len()
        );
        for (word, score) in &report.makeable {
            let bar = create_progress_bar(f64::from(*score), f64::from(best), 20);
            println!("   {word:<16} {} {score:3}", bar.green());
        }
    }
}

/// Print the high-score table
pub fn print_high_scores(records: &[HighScore]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HIGH SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for mode in GameMode::ALL {
        println!("\n{}", mode.title().bright_cyan().bold());
        for timing in [Timing::Timed, Timing::Untimed] {
            let slot = Slot::for_game(mode, timing);
            let record = records.get(slot.index()).cloned().unwrap_or_default();
            println!(
                "   {:<8} {:>5} {:<3} by {}",
                timing.to_string(),
                record.score.to_string().bright_yellow(),
                points_label(record.score),
                record.holder()
            );
        }
    }
}

/// Print the result of a dictionary survey
pub fn print_survey(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Source:            {}", stats.source);
    println!("   Words:             {}", stats.total_words);
    println!("   Letter sets:       {}", stats.distinct_keys);
    println!(
        "   Base words (≥{}):   {}",
        stats.min_anagrams,
        stats.qualifying_words.to_string().bright_yellow().bold()
    );

    let chance = stats.failure_chance * 100.0;
    let chance_text = format!("{chance:.4}% in {} attempts", stats.attempts);
    println!(
        "   Search failure:    {}",
        if stats.failure_chance > 0.01 {
            chance_text.red()
        } else {
            chance_text.green()
        }
    );
    println!("   Time taken:        {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Family sizes:".bright_cyan().bold());
    let largest_count = stats.family_sizes.values().copied().max().unwrap_or(0);
    for (size, count) in &stats.family_sizes {
        let bar = create_progress_bar(*count as f64, largest_count as f64, 30);
        println!("   {size:2}: {} {count:6}", bar.green());
    }

    if !stats.largest.is_empty() {
        println!("\n🔤 {}", "Largest families:".bright_cyan().bold());
        for family in &stats.largest {
            println!("   {}", family.join(" "));
        }
    }
}
