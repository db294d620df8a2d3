use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the binary runs with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the résumé PDF, the profile photo, and gallery media.
    pub assets_dir: PathBuf,
    /// Directory holding the optional stylesheet (`main.css`).
    pub styles_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            assets_dir: PathBuf::from(
                std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
            ),
            styles_dir: PathBuf::from(
                std::env::var("STYLES_DIR").unwrap_or_else(|_| "styles".to_string()),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
