//! Unified error types for the domain layer
//!
//! Callers branch on [`DomainError::kind`] (or match the variants) instead of
//! comparing message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregates::SessionStatus;

/// Discriminant of a [`DomainError`], for callers that only need the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidGuess,
    GameOver,
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was not an integer in the playable range
    #[error("That is an invalid guess.")]
    InvalidGuess { input: String },

    /// A guess was submitted after the session reached a terminal status
    #[error("The game is already over.")]
    GameOver { status: SessionStatus },
}

impl DomainError {
    /// Creates an invalid guess error carrying the offending input.
    ///
    /// # Example
    /// ```
    /// use hotcold_domain::{DomainError, ErrorKind};
    ///
    /// let err = DomainError::invalid_guess("abc");
    /// assert_eq!(err.kind(), ErrorKind::InvalidGuess);
    /// assert_eq!(err.to_string(), "That is an invalid guess.");
    /// ```
    pub fn invalid_guess(input: impl Into<String>) -> Self {
        Self::InvalidGuess {
            input: input.into(),
        }
    }

    /// Create a game over error
    pub fn game_over(status: SessionStatus) -> Self {
        Self::GameOver { status }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidGuess { .. } => ErrorKind::InvalidGuess,
            Self::GameOver { .. } => ErrorKind::GameOver,
        }
    }
}
