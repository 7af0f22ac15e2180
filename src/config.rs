//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Directory holding the front-end assets, relative to the working directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port, 0 picks an ephemeral port
    pub server_port: u16,
    /// Root of the static file tree served at `/`
    pub static_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    ///
    /// An unparsable `PORT` falls back to the default.
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            ..Self::default()
        }
    }

    /// Returns a copy listening on the given port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server_port = port;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
