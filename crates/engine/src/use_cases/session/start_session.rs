//! Start a new game session.

use std::sync::Arc;

use hotcold_domain::{GameSession, SessionId};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Creates fresh sessions with a random target.
pub struct StartSession {
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl StartSession {
    pub fn new(random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { random, clock }
    }

    /// Start a session. Never fails.
    pub fn execute(&self) -> GameSession {
        let id = SessionId::from_uuid(self.random.gen_uuid());
        let session = GameSession::start(
            id,
            |min, max| self.random.gen_range(min, max),
            self.clock.now(),
        );

        tracing::info!(session_id = %session.id(), "Started game session");
        tracing::trace!(session_id = %session.id(), secret = %session.target(), "Drew target");
        session
    }
}
