//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEED_COURSES` - Load demo courses at startup (default: `true`)
//! - `ID_START` - First course id handed out (default: `1`, range: 1 to 2^53 - 1)
//! - `ENABLE_TEST_ROUTES` - Mount `DELETE /__test__/data` (default: `true`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::id_generator::MAX_SAFE_ID;

/// Titles loaded into the store when seeding is enabled.
pub const SEED_TITLES: [&str; 4] = ["front", "back", "full", "devops"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, [`SEED_TITLES`] are created before the server accepts requests.
    pub seed_courses: bool,
    pub id_start: i64,
    /// When true, the store reset endpoint is routed. Disable in production.
    pub test_routes: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let seed_courses = env_flag("SEED_COURSES", true);
        let test_routes = env_flag("ENABLE_TEST_ROUTES", true);

        let id_start = match env::var("ID_START") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("ID_START must be an integer, got '{v}'"))?,
            Err(_) => 1,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            seed_courses,
            id_start,
            test_routes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `id_start` is outside `1..=MAX_SAFE_ID`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=MAX_SAFE_ID).contains(&self.id_start) {
            anyhow::bail!(
                "ID_START must be between 1 and {}, got {}",
                MAX_SAFE_ID,
                self.id_start
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Seed courses: {}", self.seed_courses);
        tracing::info!("  First course id: {}", self.id_start);
        tracing::info!(
            "  Test routes: {}",
            if self.test_routes { "enabled" } else { "disabled" }
        );
    }
}

/// Reads a boolean flag; `true`/`1` enable, `false`/`0` disable, anything
/// else (or unset) falls back to `default`.
fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Ok(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}
