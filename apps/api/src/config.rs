use anyhow::{Context, Result};

use crate::session::store::DEFAULT_SESSION_TTL_MINS;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Fails at startup if the service credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    /// Outbound request timeout. `None` leaves it to the transport default.
    pub llm_timeout_secs: Option<u64>,
    /// Idle minutes before a search session is evicted.
    pub session_ttl_mins: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = require_env("GEMINI_API_KEY")
            .or_else(|_| require_env("API_KEY"))
            .context("Set GEMINI_API_KEY (or API_KEY) to access the generative-language service")?;

        let llm_timeout_secs = match std::env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            gemini_api_key,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            llm_timeout_secs,
            session_ttl_mins: match std::env::var("SESSION_TTL_MINS") {
                Ok(raw) => raw
                    .parse::<i64>()
                    .ok()
                    .filter(|mins| *mins > 0)
                    .context("SESSION_TTL_MINS must be a positive number of minutes")?,
                Err(_) => DEFAULT_SESSION_TTL_MINS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
