//! Hangman - CLI
//!
//! Word-guessing game with TUI and line modes, pattern hints and an
//! auto-playing solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{find_hints, print_simulation_statistics, run_simple, run_simulate},
    core::SecretWord,
    logging,
    output::{print_hint_result, print_word_list_loaded},
    solver::{Solver, StrategyType},
    wordlists::{WordList, WordListError, loader::load_from_file},
};
use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman in the terminal, with hints and an auto-playing solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file of whitespace-separated words (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for secret word selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based game on stdin/stdout
    Simple {
        /// Use this secret word instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// List every word matching a pattern such as "_ a _ e"
    Hint {
        /// Revealed letters and `_` blanks; spaces are ignored
        pattern: String,
    },

    /// Let the solver play many games and report statistics
    Simulate {
        /// Number of random words to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Strategy: frequency (default), random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

/// Load the word list named by `-w`, or the embedded one
fn load_words(path: Option<&Path>) -> Result<WordList> {
    let words = match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("could not load word list {}", path.display()))?;
            print_word_list_loaded("file", words.len());
            words
        }
        None => {
            let words = WordList::embedded();
            print_word_list_loaded("embedded dictionary", words.len());
            words
        }
    };

    if words.is_empty() {
        return Err(WordListError::Empty.into());
    }
    Ok(words)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeded secret selection");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init_cli(if matches!(command, Commands::Play) {
        "off"
    } else {
        logging::DEFAULT_FILTER
    });

    let words = load_words(cli.wordlist.as_deref())?;
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => run_play_command(&words, rng),
        Commands::Simple { secret } => run_simple_command(secret, &words, &mut rng),
        Commands::Hint { pattern } => run_hint_command(&pattern, &words),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(count, &strategy, &words, &mut rng);
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, rng)?;
    run_tui(app)
}

fn run_simple_command(secret: Option<String>, words: &WordList, rng: &mut StdRng) -> Result<()> {
    let secret = match secret {
        Some(word) => {
            SecretWord::new(word.as_str()).with_context(|| format!("invalid secret word '{word}'"))?
        }
        None => words.choose_secret(rng)?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(secret, words, stdin.lock(), &mut stdout).context("line-mode game failed")?;
    Ok(())
}

fn run_hint_command(pattern: &str, words: &WordList) -> Result<()> {
    let result = find_hints(pattern, words).with_context(|| format!("bad pattern '{pattern}'"))?;
    print_hint_result(&result);
    Ok(())
}

fn run_simulate_command(count: usize, strategy_name: &str, words: &WordList, rng: &mut StdRng) {
    let secrets: Vec<&str> = words
        .words()
        .choose_multiple(rng, count)
        .map(String::as_str)
        .collect();

    println!(
        "Simulating {} games with the {strategy_name} strategy...",
        secrets.len()
    );

    let solver = Solver::new(StrategyType::from_name(strategy_name), words.words());
    let stats = run_simulate(&solver, &secrets, true);
    print_simulation_statistics(&stats);
}
