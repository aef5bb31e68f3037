//! Server configuration from environment variables.
//!
//! # Responsibility
//! - Read runtime knobs at startup with code defaults.
//!
//! # Invariants
//! - `from_env` never fails; malformed values fall back to defaults.
//! - The log directory is always absolute, as required by core logging.

use std::env;
use std::path::PathBuf;
use tally_core::default_log_level;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_FILE: &str = "tally.db";
const DEFAULT_LOG_SUBDIR: &str = "logs";

/// Effective server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, from `TALLY_ADDR`.
    pub host: String,
    /// TCP port, from `TALLY_PORT`.
    pub port: u16,
    /// SQLite database file, from `TALLY_DB`.
    pub db_path: PathBuf,
    /// Absolute log directory, from `TALLY_LOG_DIR`.
    pub log_dir: PathBuf,
    /// Log level, from `TALLY_LOG_LEVEL`; defaults by build mode.
    pub log_level: String,
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        let host = env::var("TALLY_ADDR").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("TALLY_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = env::var("TALLY_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));
        let log_dir = env::var("TALLY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_log_dir());
        let log_level =
            env::var("TALLY_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());

        Self {
            host,
            port,
            db_path,
            log_dir,
            log_level,
        }
    }

    /// Socket address tuple for `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn default_log_dir() -> PathBuf {
    env::current_dir()
        .map(|dir| dir.join(DEFAULT_LOG_SUBDIR))
        .unwrap_or_else(|_| env::temp_dir().join("tally-logs"))
}
