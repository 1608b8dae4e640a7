use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::dashboard::DEFAULT_RECENT_LIMIT;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixture document to serve. `None` serves the fixtures built into the binary.
    pub data_path: Option<PathBuf>,
    pub recent_activity_limit: usize,
    /// Artificial latency of the detail lookups, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_path: std::env::var("PORTFOLIO_DATA_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            recent_activity_limit: parse_env("RECENT_ACTIVITY_LIMIT", DEFAULT_RECENT_LIMIT)
                .context("RECENT_ACTIVITY_LIMIT must be a non-negative integer")?,
            fetch_delay_ms: parse_env("FETCH_DELAY_MS", 500)
                .context("FETCH_DELAY_MS must be a non-negative integer (milliseconds)")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            data_path: None,
            recent_activity_limit: DEFAULT_RECENT_LIMIT,
            fetch_delay_ms: 500,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}
