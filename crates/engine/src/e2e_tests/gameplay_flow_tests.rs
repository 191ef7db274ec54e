//! Full games played through the text console.

use super::e2e_helpers::{play_text, WELCOME};

fn expected(lines: &[&str]) -> Vec<String> {
    WELCOME
        .iter()
        .chain(lines.iter())
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn warmer_colder_game_ends_in_loss() {
    let output = play_text([50], "60\n40\n55\n45\n52\n");

    assert_eq!(
        output,
        expected(&[
            "You're lukewarm. Guess lower!",
            "4 guesses remaining.",
            "You're lukewarm. Guess higher!",
            "3 guesses remaining.",
            "You're burning up! Guess lower!",
            "2 guesses remaining.",
            "You're burning up! Guess higher!",
            "1 guess remaining.",
            "You Lose.",
            "The number was 50. Type 'new' to play again.",
            "Goodbye!",
        ])
    );
}

#[test]
fn first_guess_wins_and_further_guesses_are_refused() {
    let output = play_text([7], "7\n8\n");

    assert_eq!(
        output,
        expected(&[
            "You Win!",
            "Type 'new' to play again.",
            "The game is already over.",
            "Goodbye!",
        ])
    );
}

#[test]
fn repeated_guess_is_flagged_and_not_counted() {
    let output = play_text([50], "3\n3\n");

    assert_eq!(
        output,
        expected(&[
            "You're a bit chilly. Guess higher!",
            "4 guesses remaining.",
            "You have already guessed that number.",
            "Goodbye!",
        ])
    );
}

#[test]
fn invalid_inputs_are_rejected_without_using_attempts() {
    let output = play_text([50], "0\n101\nabc\nNaN\n-5\n50\n");

    let mut lines = vec!["That is an invalid guess."; 5];
    lines.extend(["You Win!", "Type 'new' to play again.", "Goodbye!"]);
    assert_eq!(output, expected(&lines));
}

#[test]
fn non_utf8_line_is_an_invalid_guess_and_play_continues() {
    let output = play_text([50], b"\xff\xfe\n60\n");

    assert_eq!(
        output,
        expected(&[
            "That is an invalid guess.",
            "You're lukewarm. Guess lower!",
            "4 guesses remaining.",
            "Goodbye!",
        ])
    );
}

#[test]
fn win_on_last_attempt_beats_loss() {
    let output = play_text([50], "1\n2\n3\n4\n50\n");

    assert_eq!(
        &output[output.len() - 3..],
        &["You Win!", "Type 'new' to play again.", "Goodbye!"]
    );
}

#[test]
fn hint_shows_target_among_decoys() {
    // target 50, decoys 12 and 88, shuffle rolls 0 and 0
    let output = play_text([50, 12, 88, 0, 0], "hint\n");

    assert_eq!(
        output,
        expected(&["The number is one of: 12, 88, 50", "Goodbye!"])
    );
}

#[test]
fn new_game_starts_fresh_session() {
    let output = play_text([7, 42], "7\nnew\n42\n");

    let mut lines = vec!["You Win!", "Type 'new' to play again."];
    lines.extend(WELCOME);
    lines.extend(["You Win!", "Type 'new' to play again.", "Goodbye!"]);
    assert_eq!(output, expected(&lines));
}

#[test]
fn quit_stops_reading_input() {
    let output = play_text([50], "\n   \nquit\n60\n");

    assert_eq!(output, expected(&["Goodbye!"]));
}
