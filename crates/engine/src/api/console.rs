//! Line-oriented console play loop.
//!
//! Reads one command per line from any `BufRead` and writes replies to any
//! `Write`, so the same loop serves stdin/stdout and in-memory tests.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use hotcold_domain::GameSession;

use crate::api::messages::ServerMessage;
use crate::app::App;
use crate::infrastructure::app_settings::OutputFormat;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a keyword is treated as a guess
    Guess(String),
    Hint,
    NewGame,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "hint" => Self::Hint,
            "new" | "reset" => Self::NewGame,
            "quit" | "exit" => Self::Quit,
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

pub struct Console<R, W> {
    app: Arc<App>,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(app: Arc<App>, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            app,
            input,
            output,
            format,
        }
    }

    /// Play until `quit` or end of input.
    ///
    /// Rejected guesses are reported and play continues; only I/O errors
    /// end the loop early. Lines that are not valid UTF-8 are decoded
    /// lossily and then rejected as guesses like any other garbage.
    pub fn run(&mut self) -> io::Result<()> {
        let mut session = self.app.use_cases.session.start.execute();
        self.send(&ServerMessage::session_started(&session))?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            match Command::parse(&String::from_utf8_lossy(&buf)) {
                Command::Empty => continue,
                Command::Quit => break,
                Command::NewGame => {
                    session = self.app.use_cases.session.start.execute();
                    self.send(&ServerMessage::session_started(&session))?;
                }
                Command::Hint => {
                    let hint = self.app.use_cases.session.hint.execute(&session);
                    self.send(&ServerMessage::HintProvided { numbers: hint })?;
                }
                Command::Guess(input) => self.guess(&mut session, &input)?,
            }
        }

        tracing::debug!(session_id = %session.id(), "Console closed");
        self.send(&ServerMessage::Goodbye)
    }

    fn guess(&mut self, session: &mut GameSession, input: &str) -> io::Result<()> {
        let message = match self.app.use_cases.session.guess.execute(session, input) {
            Ok(outcome) => ServerMessage::guess_result(&outcome),
            Err(err) => ServerMessage::error(&err),
        };
        self.send(&message)
    }

    fn send(&mut self, message: &ServerMessage) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in message.to_lines() {
                    writeln!(self.output, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, message)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(Command::parse("HINT\n"), Command::Hint);
        assert_eq!(Command::parse(" new "), Command::NewGame);
        assert_eq!(Command::parse("reset"), Command::NewGame);
        assert_eq!(Command::parse("Quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \n"), Command::Empty);
    }

    #[test]
    fn everything_else_is_a_guess() {
        assert_eq!(Command::parse(" 42\n"), Command::Guess("42".to_string()));
        assert_eq!(Command::parse("abc"), Command::Guess("abc".to_string()));
    }
}
