//! Application settings loaded from the environment
//!
//! | Variable         | Meaning                                   | Default  |
//! |------------------|-------------------------------------------|----------|
//! | `HOTCOLD_SEED`   | Seed for reproducible games (u64)         | unset    |
//! | `HOTCOLD_OUTPUT` | Console output format: `text` or `json`   | `text`   |
//! | `RUST_LOG`       | Log filter, read by `main`                | [`DEFAULT_LOG_FILTER`] |
//!
//! `main` calls `dotenvy::dotenv()` first, so a `.env` file works too.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::clock::{SeededRandom, SystemRandom};
use crate::infrastructure::ports::RandomPort;

pub const SEED_VAR: &str = "HOTCOLD_SEED";
pub const OUTPUT_VAR: &str = "HOTCOLD_OUTPUT";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "hotcold_engine=info";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("HOTCOLD_SEED must be an unsigned integer, got '{value}'")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("HOTCOLD_OUTPUT must be 'text' or 'json', got '{0}'")]
    InvalidOutput(String),
}

/// How console replies are written
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per reply
    Json,
}

impl FromStr for OutputFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(SettingsError::InvalidOutput(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Seed for the random source; `None` uses the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl AppSettings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = get(SEED_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| SettingsError::InvalidSeed { value, source })
            })
            .transpose()?;

        let output = get(OUTPUT_VAR)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { seed, output })
    }

    /// Build the random source these settings ask for.
    pub fn random(&self) -> Arc<dyn RandomPort> {
        match self.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(SystemRandom::new()),
        }
    }
}
