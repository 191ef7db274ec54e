//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    app_settings::AppSettings,
    clock::SystemClock,
    ports::{ClockPort, RandomPort},
};
use crate::use_cases;
use crate::use_cases::session::{ProvideHint, StartSession, SubmitGuess};

/// Main application state.
///
/// Holds all use cases, wired to the injected ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub session: use_cases::SessionUseCases,
}

impl App {
    pub fn new(random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>) -> Self {
        let session = use_cases::SessionUseCases::new(
            Arc::new(StartSession::new(random.clone(), clock)),
            Arc::new(SubmitGuess::new()),
            Arc::new(ProvideHint::new(random)),
        );

        Self {
            use_cases: UseCases { session },
        }
    }

    /// Wire the app with the system clock and the random source `settings` selects.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.random(), Arc::new(SystemClock::new()))
    }
}
