//! Formatting utilities for terminal output

use crate::core::STARTING_LIVES;

/// Draw the gallows for a player with `lives` remaining
///
/// One body part appears per life lost, head first; at zero lives the figure
/// is complete.
#[must_use]
pub fn gallows(lives: u8) -> [String; 7] {
    let lost = STARTING_LIVES.saturating_sub(lives);
    let part = |at: u8, symbol: char| if lost >= at { symbol } else { ' ' };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Format hint matches as one space-separated line
#[must_use]
pub fn format_matches(matches: &[&str]) -> String {
    if matches.is_empty() {
        "No matches found".to_string()
    } else {
        matches.join(" ")
    }
}

/// Hearts for remaining lives, hollow hearts for lost ones
#[must_use]
pub fn lives_bar(lives: u8) -> String {
    let lives = lives.min(STARTING_LIVES);
    format!(
        "{}{}",
        "♥".repeat(usize::from(lives)),
        "♡".repeat(usize::from(STARTING_LIVES - lives))
    )
}
