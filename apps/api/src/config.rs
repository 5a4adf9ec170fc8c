use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_SESSION_IDLE_MINUTES: u64 = 60;
const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for resume uploads, in bytes.
    pub max_resume_bytes: usize,
    /// Sessions unused for this long are dropped.
    pub session_idle_timeout: Duration,
    /// Live sessions kept at most; the least recently used is evicted beyond it.
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_resume_bytes: match std::env::var("MAX_RESUME_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_RESUME_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_RESUME_BYTES,
            },
            session_idle_timeout: match std::env::var("SESSION_IDLE_MINUTES") {
                Ok(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("SESSION_IDLE_MINUTES must be a number of minutes")?
                        * 60,
                ),
                Err(_) => Duration::from_secs(DEFAULT_SESSION_IDLE_MINUTES * 60),
            },
            max_sessions: match std::env::var("MAX_SESSIONS") {
                Ok(v) => v.parse::<usize>().context("MAX_SESSIONS must be a count")?,
                Err(_) => DEFAULT_MAX_SESSIONS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
