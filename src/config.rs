//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the items file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Default browser origin allowed by CORS (the frontend dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Port used when neither `SERVER_PORT` nor `PORT` holds a valid value
pub const DEFAULT_SERVER_PORT: u16 = 3001;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding the item collection
    pub data_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_PATH` - Items file (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port, falling back to `PORT` (default: 3001)
    /// - `CORS_ORIGIN` - Allowed origin (default: http://localhost:3000)
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            server_port: resolve_port(env::var("SERVER_PORT").ok(), env::var("PORT").ok()),
            cors_origin: env::var("CORS_ORIGIN")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }
}

/// Picks the first of `server_port`, `port` that parses as a port number.
fn resolve_port(server_port: Option<String>, port: Option<String>) -> u16 {
    server_port
        .and_then(|v| v.parse().ok())
        .or_else(|| port.and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_SERVER_PORT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            server_port: DEFAULT_SERVER_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
