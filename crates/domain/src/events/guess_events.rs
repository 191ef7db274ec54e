//! Guess-related domain events
//!
//! `GuessFeedback` is returned from `GameSession::submit_guess` and tells the
//! caller how the guess was classified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance below which a guess is "burning up"
const BURNING_UP_BELOW: u8 = 10;
/// Distance below which a guess is "lukewarm"
const LUKEWARM_BELOW: u8 = 25;
/// Distance below which a guess is "a bit chilly"
const BIT_CHILLY_BELOW: u8 = 50;

/// Classification of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessFeedback {
    /// The value was already in the history; nothing was recorded
    Duplicate,
    /// The guess matched the target
    Win,
    /// The guess limit was reached without a match
    Loss,
    /// Within 9 of the target
    BurningUp,
    /// Within 24 of the target
    Lukewarm,
    /// Within 49 of the target
    BitChilly,
    /// 50 or more away
    IceCold,
}

impl GuessFeedback {
    /// Pick the temperature band for a non-winning guess.
    pub fn for_distance(distance: u8) -> Self {
        if distance < BURNING_UP_BELOW {
            Self::BurningUp
        } else if distance < LUKEWARM_BELOW {
            Self::Lukewarm
        } else if distance < BIT_CHILLY_BELOW {
            Self::BitChilly
        } else {
            Self::IceCold
        }
    }

    /// The player-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Duplicate => "You have already guessed that number.",
            Self::Win => "You Win!",
            Self::Loss => "You Lose.",
            Self::BurningUp => "You're burning up!",
            Self::Lukewarm => "You're lukewarm.",
            Self::BitChilly => "You're a bit chilly.",
            Self::IceCold => "You're ice cold!",
        }
    }

    /// Returns true for results that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }

    /// Returns true for the four temperature bands.
    pub fn is_band(&self) -> bool {
        matches!(
            self,
            Self::BurningUp | Self::Lukewarm | Self::BitChilly | Self::IceCold
        )
    }
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
