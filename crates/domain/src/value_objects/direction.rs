use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the next guess should move to approach the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// The last guess was below the target
    Higher,
    /// The last guess was above the target
    Lower,
}

impl Direction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Higher => "Guess higher!",
            Self::Lower => "Guess lower!",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
