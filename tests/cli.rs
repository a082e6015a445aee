use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn hangman() -> Command {
    let mut cmd = Command::cargo_bin("hangman").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn simple_game_with_fixed_secret() {
    let out = stdout_of(hangman().args(["simple", "--secret", "dog"]).write_stdin("d\no\ng\n"));

    assert!(out.contains("words loaded."));
    assert!(out.contains("I am thinking of a word that is 3 letters long."));
    assert!(out.contains("Good guess!"));
    assert!(out.contains("d o _ \nYou have 6 guesses left."));
    assert!(out.contains("You guessed the word! dog"));
    assert!(out.contains("Your total score for this game is: 18"));
}

#[test]
fn simple_game_ends_at_end_of_input() {
    let out = stdout_of(hangman().args(["simple", "--secret", "dog"]).write_stdin("a\n"));

    assert!(out.contains("You lose 2 guesses."));
    assert!(out.contains("No more input. The word was: dog."));
}

#[test]
fn simple_game_picks_from_custom_list() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "cat").unwrap();

    let out = stdout_of(
        hangman()
            .arg("-w")
            .arg(file.path())
            .args(["--seed", "1", "simple"])
            .write_stdin("c\na\nt\n"),
    );

    assert!(out.contains("Loading word list from file..."));
    assert!(out.contains("1 words loaded."));
    assert!(out.contains("You guessed the word! cat"));
}

#[test]
fn hint_lists_matches_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "dog fog log\ncat dig").unwrap();

    let out = stdout_of(hangman().arg("-w").arg(file.path()).args(["hint", "_ o g"]));

    assert!(out.contains("5 words loaded."));
    assert!(out.contains("dog fog log"));
    assert!(!out.contains("cat"));
}

#[test]
fn hint_without_matches() {
    let out = stdout_of(hangman().args(["hint", "_ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _"]));
    assert!(out.contains("No matches found"));
}

#[test]
fn simulate_prints_statistics() {
    let out = stdout_of(hangman().args(["--seed", "3", "simulate", "-n", "5"]));

    assert!(out.contains("Simulating 5 games"));
    assert!(out.contains("Simulation Results"));
    assert!(out.contains("Games played:        5"));
}

#[test]
fn missing_word_list_fails() {
    hangman()
        .args(["-w", "/definitely/not/here.txt", "hint", "_"])
        .assert()
        .failure();
}

#[test]
fn empty_word_list_fails() {
    let file = NamedTempFile::new().unwrap();
    hangman()
        .arg("-w")
        .arg(file.path())
        .args(["simple"])
        .assert()
        .failure();
}

#[test]
fn invalid_secret_fails() {
    hangman()
        .args(["simple", "--secret", "no way"])
        .assert()
        .failure();
}
