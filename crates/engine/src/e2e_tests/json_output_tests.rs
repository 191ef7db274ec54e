//! Console scenarios with JSON output.

use serde_json::Value;

use super::e2e_helpers::play;
use crate::infrastructure::app_settings::OutputFormat;

fn play_json<I>(rolls: impl IntoIterator<Item = i32>, input: &I) -> Vec<Value>
where
    I: AsRef<[u8]> + ?Sized,
{
    play(rolls, input, OutputFormat::Json)
        .lines()
        .map(|line| serde_json::from_str(line).expect("one JSON object per line"))
        .collect()
}

#[test]
fn emits_one_tagged_object_per_reply() {
    let messages = play_json([50, 1, 2, 0, 0], "60\nhint\nabc\n");

    let types: Vec<&str> = messages
        .iter()
        .map(|m| m["type"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(
        types,
        vec![
            "sessionStarted",
            "guessResult",
            "hintProvided",
            "error",
            "goodbye"
        ]
    );

    let started = &messages[0];
    assert_eq!(started["sessionId"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(started["min"], 1);
    assert_eq!(started["max"], 100);
    assert_eq!(started["maxGuesses"], 5);

    let result = &messages[1];
    assert_eq!(result["guess"], 60);
    assert_eq!(result["feedback"], "lukewarm");
    assert_eq!(result["message"], "You're lukewarm.");
    assert_eq!(result["direction"], "lower");
    assert_eq!(result["guessesRemaining"], 4);
    assert_eq!(result["status"], "inProgress");

    let hint = messages[2]["numbers"]
        .as_array()
        .expect("hint numbers array");
    assert_eq!(hint.len(), 3);
    assert!(hint.contains(&Value::from(50)));

    assert_eq!(messages[3]["kind"], "invalidGuess");
    assert_eq!(messages[3]["message"], "That is an invalid guess.");
}

#[test]
fn game_over_reports_answer_and_kind() {
    let messages = play_json([50], "1\n2\n3\n4\n5\n6\n");

    let loss = &messages[5];
    assert_eq!(loss["feedback"], "loss");
    assert_eq!(loss["status"], "lost");
    assert_eq!(loss["answer"], 50);

    assert_eq!(messages[6]["type"], "error");
    assert_eq!(messages[6]["kind"], "gameOver");
}
