//! Dictionary survey
//!
//! Reports how well a dictionary suits the anagram mode: how many words
//! have enough anagrams to be picked as a base word, and how likely the
//! random search is to find one within its attempt budget.

use crate::game::anagram_families;
use crate::lexicon::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics about a dictionary's anagram families
#[derive(Debug)]
pub struct SurveyStatistics {
    pub source: String,
    pub total_words: usize,
    /// Distinct letter multisets
    pub distinct_keys: usize,
    /// Family size -> number of families of that size
    pub family_sizes: BTreeMap<usize, usize>,
    /// Words with at least `min_anagrams` anagrams
    pub qualifying_words: usize,
    pub min_anagrams: usize,
    /// Largest families, biggest first
    pub largest: Vec<Vec<String>>,
    /// Chance the random search fails within `attempts` draws
    pub failure_chance: f64,
    pub attempts: usize,
    pub duration: Duration,
}

/// Survey the lexicon's anagram families
///
/// `top` limits how many of the largest families are kept for display.
///
/// # Panics
///
/// Panics if the hard-coded progress template is invalid.
#[must_use]
pub fn run_survey(
    lexicon: &Lexicon,
    min_anagrams: usize,
    attempts: usize,
    top: usize,
) -> SurveyStatistics {
    let start = Instant::now();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Grouping {} words...", lexicon.len()));

    let families = anagram_families(lexicon, 1);

    pb.set_message("Counting families...");
    let mut family_sizes: BTreeMap<usize, usize> = BTreeMap::new();
    let mut qualifying_words = 0;
    for family in &families {
        *family_sizes.entry(family.len()).or_insert(0) += 1;
        qualifying_words += qualifying_members(family, min_anagrams);
    }

    let failure_chance = if lexicon.is_empty() {
        1.0
    } else {
        let p = qualifying_words as f64 / lexicon.len() as f64;
        (1.0 - p).powi(i32::try_from(attempts).unwrap_or(i32::MAX))
    };

    pb.finish_and_clear();

    SurveyStatistics {
        source: lexicon.source().to_string(),
        total_words: lexicon.len(),
        distinct_keys: families.len(),
        family_sizes,
        qualifying_words,
        min_anagrams,
        largest: families.into_iter().filter(|f| f.len() > 1).take(top).collect(),
        failure_chance,
        attempts,
        duration: start.elapsed(),
    }
}

/// Members of a family that would be picked as a base word
///
/// A word's anagrams are the family members that differ from it after
/// case folding, so case variants of a word do not count.
fn qualifying_members(family: &[String], min_anagrams: usize) -> usize {
    let folded: Vec<String> = family.iter().map(|w| w.to_lowercase()).collect();
    folded
        .iter()
        .filter(|word| {
            let variants = folded.iter().filter(|other| other == word).count();
            family.len() - variants >= min_anagrams
        })
        .count()
}
