//! Hotcold - play the warmer/colder number-guessing game in a terminal.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotcold_engine::api::Console;
use hotcold_engine::infrastructure::app_settings::{AppSettings, DEFAULT_LOG_FILTER};
use hotcold_engine::App;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with game output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = AppSettings::from_env().context("Failed to load settings")?;
    tracing::info!(seed = ?settings.seed, output = %settings.output, "Starting Hotcold");

    let app = Arc::new(App::from_settings(&settings));
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(app, stdin.lock(), stdout.lock(), settings.output)
        .run()
        .context("Console I/O failed")?;

    Ok(())
}
