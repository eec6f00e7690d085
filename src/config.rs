//! Environment-driven configuration.
//!
//! DESIGN
//! ======
//! All knobs come from the process environment (with `.env` support via
//! dotenvy) and fall back to development defaults, so `cargo run` works
//! out of the box while deployments override paths and port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port for the HTTP listener. `PORT`, default 3000.
    pub port: u16,
    /// Directory where generated image sets are persisted. `UPLOAD_DIR`,
    /// default `uploads` relative to the working directory.
    pub uploads_dir: PathBuf,
    /// Directory holding the static frontend (index page + wasm bundle).
    /// `SITE_DIR`, default `site` next to the manifest.
    pub site_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but does not
    /// parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = parse_port(std::env::var("PORT").ok())?;

        let uploads_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let site_dir = std::env::var("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site"));

        Ok(Self { port, uploads_dir, site_dir })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
        None => Ok(DEFAULT_PORT),
    }
}
