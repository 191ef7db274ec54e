//! Validated guess newtype
//!
//! A `Guess` is an integer in `[MIN_GUESS, MAX_GUESS]`, valid by construction.
//! The session target is a `Guess` too, so the same range applies to both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Smallest playable number
pub const MIN_GUESS: u8 = 1;

/// Largest playable number
pub const MAX_GUESS: u8 = 100;

/// A number in the playable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Guess(u8);

impl Guess {
    /// Create a validated guess.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuess` if the value is outside `[1, 100]`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < i64::from(MIN_GUESS) || value > i64::from(MAX_GUESS) {
            return Err(DomainError::invalid_guess(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    /// Create a guess from a floating point number.
    ///
    /// NaN, infinities and non-integral values are rejected along with
    /// anything out of range.
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DomainError::invalid_guess(value.to_string()));
        }
        if value < f64::from(MIN_GUESS) || value > f64::from(MAX_GUESS) {
            return Err(DomainError::invalid_guess(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    /// Parse raw player input such as `"42"`, `" 7 "` or `"50.0"`.
    ///
    /// The error carries the input exactly as given.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let parsed = if let Ok(value) = trimmed.parse::<i64>() {
            Self::new(value)
        } else if let Ok(value) = trimmed.parse::<f64>() {
            Self::from_f64(value)
        } else {
            Err(DomainError::invalid_guess(input))
        };
        parsed.map_err(|_| DomainError::invalid_guess(input))
    }

    /// Build a guess from a raw roll, forcing it into range.
    pub(crate) fn clamped(value: i32) -> Self {
        Self(value.clamp(i32::from(MIN_GUESS), i32::from(MAX_GUESS)) as u8)
    }

    /// Returns the numeric value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Absolute distance between two guesses.
    #[inline]
    pub fn distance(self, other: Guess) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Guess {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for Guess {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Guess> for u8 {
    fn from(guess: Guess) -> u8 {
        guess.0
    }
}
