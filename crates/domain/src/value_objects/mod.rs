//! Value objects - Immutable objects defined by their attributes

mod direction;
mod guess;
mod hint;

pub use direction::Direction;
pub use guess::{Guess, MAX_GUESS, MIN_GUESS};
pub use hint::{Hint, HINT_SIZE};
