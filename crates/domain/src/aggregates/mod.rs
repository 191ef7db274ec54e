//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations

pub mod game_session;

pub use game_session::{GameSession, SessionStatus, MAX_GUESSES};
