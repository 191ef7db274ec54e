//! Shared helpers for console scenarios.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::api::Console;
use crate::app::App;
use crate::infrastructure::app_settings::OutputFormat;
use crate::infrastructure::clock::{FixedClock, ScriptedRandom};

/// Run the console over `input` and return everything it wrote.
///
/// `rolls` feeds `gen_range` in order: the target is the first roll of each
/// session, a hint consumes two decoys and two shuffle rolls.
pub fn play<I>(rolls: impl IntoIterator<Item = i32>, input: &I, format: OutputFormat) -> String
where
    I: AsRef<[u8]> + ?Sized,
{
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
    let app = Arc::new(App::new(
        Arc::new(ScriptedRandom::new(rolls)),
        Arc::new(clock),
    ));

    let mut output = Vec::new();
    Console::new(app, input.as_ref(), &mut output, format)
        .run()
        .expect("console run");
    String::from_utf8(output).expect("utf8 output")
}

pub fn play_text<I>(rolls: impl IntoIterator<Item = i32>, input: &I) -> Vec<String>
where
    I: AsRef<[u8]> + ?Sized,
{
    play(rolls, input, OutputFormat::Text)
        .lines()
        .map(str::to_string)
        .collect()
}

pub const WELCOME: [&str; 2] = [
    "Guess a number between 1 and 100. You have 5 guesses.",
    "Commands: hint, new, quit",
];
