//! Common utility functions shared across the domain.
//!
//! - **Pure functions only** - no side effects, no I/O
//! - Randomness comes in through a roll closure, never a global source

pub mod shuffle;

pub use shuffle::shuffle;
