//! Display functions for command results

use super::formatters::format_matches;
use crate::commands::HintResult;
use colored::Colorize;

/// Print the result of a hint lookup
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {}",
        result.pattern.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let matches: Vec<&str> = result.matches.iter().map(String::as_str).collect();
    if matches.is_empty() {
        println!("\n{}", format_matches(&matches).red());
        return;
    }

    println!(
        "\n{} {}",
        "Possible word matches are:".green(),
        format!("({})", matches.len()).bright_black()
    );
    println!("{}", format_matches(&matches));
}

/// Announce the word list the way every mode starts
pub fn print_word_list_loaded(source: &str, count: usize) {
    println!("Loading word list from {source}...");
    println!("{} words loaded.", count.to_string().bright_cyan());
}
