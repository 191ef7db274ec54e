//! Hotcold Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Session orchestration over the domain aggregate
//! - `infrastructure/` - Port traits and their clock, random and settings adapters
//! - `api/` - Console entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end console scenarios with scripted randomness.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
