use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Logo for report headers. Unset means the text fallback is used.
    pub logo_url: Option<String>,
    /// Hard bound on the best-effort logo fetch.
    pub logo_fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            logo_url: std::env::var("LOGO_URL").ok().filter(|s| !s.is_empty()),
            logo_fetch_timeout_secs: std::env::var("LOGO_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u64>()
                .context("LOGO_FETCH_TIMEOUT_SECS must be a positive integer")?,
        })
    }
}
