use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, LOGIN_ROUTE};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Bullana REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Bullana auth client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Route to navigate to when a request comes back unauthorized
    pub login_route: String,
    /// Optional path for file-backed session persistence
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading `.env` first
    ///
    /// Recognized variables:
    /// * `BULLANA_API_URL` - base URL of the backend (default `http://localhost:13578`)
    /// * `BULLANA_REST_TIMEOUT` - per-request timeout in seconds (default 10)
    /// * `BULLANA_LOGIN_ROUTE` - redirect target on unauthorized (default `/login`)
    /// * `BULLANA_SESSION_FILE` - path for file-backed session storage (optional)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("BULLANA_API_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("BULLANA_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            login_route: get_env_or_default("BULLANA_LOGIN_ROUTE", String::from(LOGIN_ROUTE)),
            session_file: get_env_or_none::<String>("BULLANA_SESSION_FILE").map(PathBuf::from),
        }
    }

    /// Creates a configuration with an explicit base URL and defaults elsewhere
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            login_route: String::from(LOGIN_ROUTE),
            session_file: None,
        }
    }
}
