//! Simple interactive CLI mode
//!
//! Line-based Hangman without the TUI: one guess per line on the input,
//! plain text feedback on the output.

use crate::core::{Game, GameStatus, GuessOutcome, SecretWord, Turn};
use crate::hints::possible_matches;
use crate::output::formatters::{format_matches, gallows};
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How a line-mode game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: String,
    /// `Playing` if input ran out before the game finished
    pub status: GameStatus,
    pub rounds: usize,
    pub lives: u8,
    pub score: Option<usize>,
}

/// Run one game of Hangman over `input` and `output`
///
/// Returns when the word is guessed, lives run out, or `input` reaches end
/// of file.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple<R: BufRead, W: Write>(
    secret: SecretWord,
    words: &WordList,
    mut input: R,
    output: &mut W,
) -> io::Result<GameSummary> {
    let mut game = Game::new(secret);

    writeln!(output, "Welcome to the Game of Hangman!")?;
    writeln!(
        output,
        "I am thinking of a word that is {} letters long.",
        game.secret().len()
    )?;
    writeln!(output, "You have {} warnings left.", game.warnings())?;

    while !game.is_over() {
        print_round_header(&game, output)?;

        let Some(line) = read_guess(&mut input, output)? else {
            writeln!(output)?;
            writeln!(output, "No more input. The word was: {}.", game.secret())?;
            break;
        };

        // is_over() was checked above, so submit cannot fail here
        let Ok(turn) = game.submit(&line) else { break };
        report_turn(&game, &turn, words, output)?;
    }

    match game.status() {
        GameStatus::Won => {
            writeln!(output, "{}", format!("You guessed the word! {}", game.secret()).green().bold())?;
            if let Some(score) = game.score() {
                writeln!(output, "Your total score for this game is: {score}")?;
            }
        }
        GameStatus::Lost => {
            for line in gallows(0) {
                writeln!(output, "{line}")?;
            }
            writeln!(output, "{}", format!("Sorry the word was: {}.", game.secret()).red())?;
        }
        GameStatus::Playing => {}
    }

    info!(status = ?game.status(), rounds = game.rounds(), "line-mode game finished");

    Ok(GameSummary {
        secret: game.secret().to_string(),
        status: game.status(),
        rounds: game.rounds(),
        lives: game.lives(),
        score: game.score(),
    })
}

fn print_round_header<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    writeln!(output, "-------------------------")?;
    for line in gallows(game.lives()) {
        writeln!(output, "{line}")?;
    }
    writeln!(output, "{}", game.pattern())?;
    writeln!(output, "You have {} guesses left.", game.lives())?;
    writeln!(output, "Available Letters: {}", game.available_letters())
}

/// Prompt for and read one line; `None` at end of input
fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "Guess a letter or * for a hint: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn report_turn<W: Write>(
    game: &Game,
    turn: &Turn,
    words: &WordList,
    output: &mut W,
) -> io::Result<()> {
    match &turn.outcome {
        GuessOutcome::Solved => {}
        GuessOutcome::HintRequested => {
            let pattern = game.pattern();
            let matches = possible_matches(&pattern, words.words());
            writeln!(output, "Possible word matches are:")?;
            writeln!(output, "{}", format_matches(&matches))?;
        }
        GuessOutcome::Duplicate {
            letter,
            warnings_left,
        } => {
            writeln!(
                output,
                "{} You have {warnings_left} warnings left.",
                format!("You have guessed this letter before: {letter}.").yellow()
            )?;
        }
        GuessOutcome::NotALetter {
            input,
            warnings_left,
        } => {
            writeln!(
                output,
                "{} You have {warnings_left} warnings left.",
                format!("Oops, that is not a letter: {input}.").yellow()
            )?;
        }
        GuessOutcome::Hit { .. } => {
            writeln!(output, "{}", "Good guess!".green())?;
        }
        GuessOutcome::Miss { letter, lives_lost } => {
            writeln!(
                output,
                "{} You lose {lives_lost} {}.",
                format!("Oops, the letter \"{letter}\" is not in the word!").red(),
                if *lives_lost == 1 { "guess" } else { "guesses" }
            )?;
        }
    }

    if turn.warning_penalty {
        writeln!(
            output,
            "{}",
            "You have no warnings left, so you lose one guess.".red()
        )?;
    }

    Ok(())
}
