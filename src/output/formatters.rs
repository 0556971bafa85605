//! Formatting utilities for terminal output

use crate::core::{Clue, Clues, Word};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Render a guess with each letter colored by its clue
#[must_use]
pub fn colored_guess(word: &Word, clues: &Clues) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(clues.iter())
        .map(|(letter, clue)| {
            let cell = format!(" {letter} ");
            match clue {
                Clue::Green => cell.black().on_green().to_string(),
                Clue::Yellow => cell.black().on_yellow().to_string(),
                Clue::Gray => cell.white().on_bright_black().to_string(),
                Clue::Unknown => cell,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for `len` simulation tasks
///
/// # Panics
/// Panics if the built-in template is malformed.
#[must_use]
pub fn task_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb
}
