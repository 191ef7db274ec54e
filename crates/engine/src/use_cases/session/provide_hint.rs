//! Provide a hint for a session.

use std::sync::Arc;

use hotcold_domain::{GameSession, Hint};

use crate::infrastructure::ports::RandomPort;

/// Draws decoys and shuffles them with the target.
pub struct ProvideHint {
    random: Arc<dyn RandomPort>,
}

impl ProvideHint {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(&self, session: &GameSession) -> Hint {
        let hint = session.hint(|min, max| self.random.gen_range(min, max));
        tracing::debug!(session_id = %session.id(), hint = %hint, "Provided hint");
        hint
    }
}
