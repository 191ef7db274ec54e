//! Submit a guess to a running session.

use hotcold_domain::{Direction, GameSession, Guess, GuessFeedback, SessionStatus};

use super::SessionError;

/// Result of a guess that was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Guess,
    pub feedback: GuessFeedback,
    /// Only set for the temperature bands.
    pub direction: Option<Direction>,
    pub guesses_remaining: usize,
    pub status: SessionStatus,
    /// The target, revealed once the session is over.
    pub answer: Option<Guess>,
}

/// Validates raw input and feeds it to the session.
#[derive(Default)]
pub struct SubmitGuess;

impl SubmitGuess {
    pub fn new() -> Self {
        Self
    }

    /// Parse `input` and evaluate it against `session`.
    ///
    /// # Errors
    /// * `DomainError::InvalidGuess` - input is not an integer in 1..=100
    /// * `DomainError::GameOver` - the session already ended
    ///
    /// The session is unchanged on error.
    pub fn execute(
        &self,
        session: &mut GameSession,
        input: &str,
    ) -> Result<GuessOutcome, SessionError> {
        let guess = Guess::parse(input).inspect_err(|_| {
            tracing::warn!(session_id = %session.id(), input = %input.trim(), "Rejected invalid guess");
        })?;

        let feedback = session.submit_guess(guess).inspect_err(|err| {
            tracing::warn!(session_id = %session.id(), error = %err, "Guess after game over");
        })?;

        let direction = if feedback.is_band() {
            session.direction()
        } else {
            None
        };
        let status = session.status();

        tracing::debug!(
            session_id = %session.id(),
            guess = %guess,
            feedback = ?feedback,
            remaining = session.guesses_remaining(),
            "Evaluated guess"
        );
        if status.is_terminal() {
            tracing::info!(session_id = %session.id(), status = %status, guesses = session.history().len(), "Game over");
        }

        Ok(GuessOutcome {
            guess,
            feedback,
            direction,
            guesses_remaining: session.guesses_remaining(),
            status,
            answer: status.is_terminal().then(|| session.target()),
        })
    }
}
