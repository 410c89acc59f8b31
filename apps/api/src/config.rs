use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory containing `bg.jpg` and `bg-v2.jpg`.
    pub assets_dir: PathBuf,
    /// TrueType/OpenType font used for every overlay.
    pub font_path: PathBuf,
    pub font_size_px: f32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            assets_dir: PathBuf::from(env_or("ASSETS_DIR", ".")),
            font_path: PathBuf::from(env_or("FONT_PATH", "fonts/Arial.ttf")),
            font_size_px: env_or("FONT_SIZE_PX", "63")
                .parse::<f32>()
                .context("FONT_SIZE_PX must be a number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
