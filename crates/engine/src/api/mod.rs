//! API layer - console entry point.

pub mod console;
pub mod messages;

pub use console::{Command, Console};
pub use messages::ServerMessage;
