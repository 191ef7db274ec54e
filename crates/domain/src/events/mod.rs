//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! session state was modified.

pub mod guess_events;

pub use guess_events::*;
