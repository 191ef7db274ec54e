//! Session use cases.
//!
//! Orchestrates one game: starting a session, submitting guesses and asking
//! for hints. The session itself is owned by the caller.

use std::sync::Arc;

use hotcold_domain::{DomainError, ErrorKind};
use thiserror::Error;

mod provide_hint;
mod start_session;
mod submit_guess;

pub use provide_hint::ProvideHint;
pub use start_session::StartSession;
pub use submit_guess::{GuessOutcome, SubmitGuess};

/// Container for session use cases.
pub struct SessionUseCases {
    pub start: Arc<StartSession>,
    pub guess: Arc<SubmitGuess>,
    pub hint: Arc<ProvideHint>,
}

impl SessionUseCases {
    pub fn new(start: Arc<StartSession>, guess: Arc<SubmitGuess>, hint: Arc<ProvideHint>) -> Self {
        Self { start, guess, hint }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
        }
    }
}
