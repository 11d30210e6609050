use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Unset means the catalog compiled into the binary.
    pub resource_catalog_path: Option<PathBuf>,
    /// Unset means no client-side timeout on generation calls.
    pub generation_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            resource_catalog_path: optional_env("RESOURCE_CATALOG_PATH").map(PathBuf::from),
            generation_timeout: optional_env("GENERATION_TIMEOUT_SECS")
                .map(|secs| {
                    secs.parse::<u64>()
                        .ok()
                        .filter(|&secs| secs > 0)
                        .context("GENERATION_TIMEOUT_SECS must be a positive whole number of seconds")
                })
                .transpose()?
                .map(Duration::from_secs),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
