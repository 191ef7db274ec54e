//! Hint value object: the target hidden among random decoys

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Guess;

/// Number of values in a hint
pub const HINT_SIZE: usize = 3;

/// Three candidate numbers, one of which is the session target.
///
/// Decoys are drawn independently and are not de-duplicated, so a hint may
/// repeat a number or show the target more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint([Guess; HINT_SIZE]);

impl Hint {
    pub(crate) fn new(numbers: [Guess; HINT_SIZE]) -> Self {
        Self(numbers)
    }

    /// Returns the candidates in presentation order.
    #[inline]
    pub fn numbers(&self) -> &[Guess; HINT_SIZE] {
        &self.0
    }

    /// Returns true if `guess` is one of the candidates.
    pub fn contains(&self, guess: Guess) -> bool {
        self.0.contains(&guess)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}, {b}, {c}")
    }
}
