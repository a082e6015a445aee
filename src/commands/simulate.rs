//! Auto-play simulation
//!
//! Runs the solver against many secret words and gathers statistics.

use crate::core::{Game, GameStatus, SecretWord, STARTING_LIVES};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Hard stop for a single simulated game
const MAX_ROUNDS: usize = 64;

/// Result from playing a single word
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub won: bool,
    pub rounds: usize,
    pub lives_left: u8,
    pub misses: String,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Wins keyed by lives left at the end
    pub lives_distribution: FxHashMap<u8, usize>,
    pub average_rounds: f64,
    pub average_lives_left: f64,
    pub lost_words: Vec<(String, String)>,
    pub total_time: Duration,
}

impl SimulationStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Let the solver play one game against `secret`
pub fn play_game<S: Strategy>(solver: &Solver<S>, secret: SecretWord) -> GameRecord {
    let mut game = Game::new(secret);

    while !game.is_over() && game.rounds() < MAX_ROUNDS {
        let Some(next) = solver.next_move(&game) else {
            break;
        };
        if game.submit(&next.to_string()).is_err() {
            break;
        }
    }

    if !game.is_over() {
        warn!(word = %game.secret(), rounds = game.rounds(), "simulated game did not finish");
    }

    let misses = game
        .guessed()
        .difference(game.secret().letters())
        .to_string();

    GameRecord {
        word: game.secret().to_string(),
        won: game.status() == GameStatus::Won,
        rounds: game.rounds(),
        lives_left: game.lives(),
        misses,
    }
}

/// Play one game per word in `secrets`, in parallel
///
/// Words that are not valid secrets are skipped.
pub fn run_simulate<S: Strategy + Sync>(
    solver: &Solver<S>,
    secrets: &[&str],
    show_progress: bool,
) -> SimulationStatistics {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let results: Vec<GameRecord> = secrets
        .par_iter()
        .filter_map(|&word| SecretWord::new(word).ok())
        .map(|secret| {
            let record = play_game(solver, secret);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[GameRecord], total_time: Duration) -> SimulationStatistics {
    let won = results.iter().filter(|r| r.won).count();

    let mut lives_distribution = FxHashMap::default();
    for record in results.iter().filter(|r| r.won) {
        *lives_distribution.entry(record.lives_left).or_insert(0) += 1;
    }

    // An empty run averages to zero rather than NaN
    let games = results.len().max(1) as f64;
    let average_rounds = results.iter().map(|r| r.rounds as f64).sum::<f64>() / games;
    let average_lives_left = results
        .iter()
        .map(|r| f64::from(r.lives_left))
        .sum::<f64>()
        / games;

    let mut lost_words: Vec<(String, String)> = results
        .iter()
        .filter(|r| !r.won)
        .map(|r| (r.word.clone(), r.misses.clone()))
        .collect();
    lost_words.sort();
    lost_words.truncate(10);

    SimulationStatistics {
        total_games: results.len(),
        won,
        lost: results.len() - won,
        lives_distribution,
        average_rounds,
        average_lives_left,
        lost_words,
        total_time,
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:                {} {}",
            stats.lost,
            format!("({:.1}%)", 100.0 - stats.win_rate()).red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!("  Average lives left:  {:.2}", stats.average_lives_left);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Lives Left When Won".bright_cyan().bold());
    let max_count = stats.lives_distribution.values().copied().max().unwrap_or(1);
    for lives in (1..=STARTING_LIVES).rev() {
        let count = stats.lives_distribution.get(&lives).copied().unwrap_or(0);
        if stats.won > 0 {
            let percentage = count as f64 / stats.won as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {lives} lives: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.lost_words.is_empty() {
        println!("\n😰 {}", "Lost Words".yellow().bold());
        for (word, misses) in &stats.lost_words {
            println!("  {} (missed: {misses})", word.to_uppercase().yellow());
        }
    }
}
