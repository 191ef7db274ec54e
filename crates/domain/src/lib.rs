//! Hotcold Domain - rules of the number-guessing game
//!
//! Everything in this crate is pure: no I/O and no random source of its own.
//! Randomness is injected as a roll closure `FnMut(i32, i32) -> i32` that
//! returns an integer in an inclusive range, and session ids are passed in
//! by the caller, so every rule can be replayed deterministically.

extern crate self as hotcold_domain;

pub mod aggregates;
pub mod common;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{GameSession, SessionStatus, MAX_GUESSES};
pub use common::shuffle;
pub use error::{DomainError, ErrorKind};
pub use events::GuessFeedback;
pub use ids::SessionId;
pub use value_objects::{Direction, Guess, Hint, HINT_SIZE, MAX_GUESS, MIN_GUESS};
