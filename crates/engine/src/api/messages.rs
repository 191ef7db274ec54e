//! Messages written by the console, in text or JSON form.

use serde::Serialize;

use hotcold_domain::{
    Direction, ErrorKind, GameSession, Guess, GuessFeedback, Hint, SessionStatus, MAX_GUESS,
    MAX_GUESSES, MIN_GUESS,
};

use crate::use_cases::session::{GuessOutcome, SessionError};

/// Messages from the engine to the player
///
/// Tags, field names and enum values are all camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// A new session is ready
    SessionStarted {
        session_id: String,
        min: u8,
        max: u8,
        max_guesses: usize,
    },
    /// A guess was evaluated
    GuessResult {
        guess: Guess,
        feedback: GuessFeedback,
        message: &'static str,
        direction: Option<Direction>,
        guesses_remaining: usize,
        status: SessionStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        answer: Option<Guess>,
    },
    /// Hint candidates
    HintProvided { numbers: Hint },
    /// A guess was rejected
    Error { kind: ErrorKind, message: String },
    /// The console is shutting down
    Goodbye,
}

impl ServerMessage {
    pub fn session_started(session: &GameSession) -> Self {
        Self::SessionStarted {
            session_id: session.id().to_string(),
            min: MIN_GUESS,
            max: MAX_GUESS,
            max_guesses: MAX_GUESSES,
        }
    }

    pub fn guess_result(outcome: &GuessOutcome) -> Self {
        Self::GuessResult {
            guess: outcome.guess,
            feedback: outcome.feedback,
            message: outcome.feedback.message(),
            direction: outcome.direction,
            guesses_remaining: outcome.guesses_remaining,
            status: outcome.status,
            answer: outcome.answer,
        }
    }

    pub fn error(err: &SessionError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Human-readable rendering, one entry per output line.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            Self::SessionStarted {
                min,
                max,
                max_guesses,
                ..
            } => vec![
                format!("Guess a number between {min} and {max}. You have {max_guesses} guesses."),
                "Commands: hint, new, quit".to_string(),
            ],
            Self::GuessResult {
                message,
                direction,
                guesses_remaining,
                status,
                answer,
                feedback,
                ..
            } => {
                let mut lines = vec![match direction {
                    Some(direction) => format!("{message} {direction}"),
                    None => message.to_string(),
                }];
                match status {
                    SessionStatus::InProgress if *feedback != GuessFeedback::Duplicate => {
                        lines.push(match guesses_remaining {
                            1 => "1 guess remaining.".to_string(),
                            n => format!("{n} guesses remaining."),
                        });
                    }
                    SessionStatus::InProgress => {}
                    SessionStatus::Won => lines.push("Type 'new' to play again.".to_string()),
                    SessionStatus::Lost => lines.push(match answer {
                        Some(answer) => {
                            format!("The number was {answer}. Type 'new' to play again.")
                        }
                        None => "Type 'new' to play again.".to_string(),
                    }),
                }
                lines
            }
            Self::HintProvided { numbers } => vec![format!("The number is one of: {numbers}")],
            Self::Error { message, .. } => vec![message.clone()],
            Self::Goodbye => vec!["Goodbye!".to_string()],
        }
    }
}
