use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// All operation failures surface as one of these variants. Server-reported
/// failures carry the human-readable message extracted from the response
/// body; transport failures wrap the underlying `reqwest` error.
#[derive(Debug)]
pub enum AppError {
    /// The server rejected the request with 401; local session was cleared
    Unauthorized,
    /// Server-reported failure with a message extracted from the body
    Api(String),
    /// Request failed with an unexpected HTTP status
    Unexpected(StatusCode),
    /// Transport-level failure (connection, timeout, TLS, ...)
    Network(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Api(msg) => write!(f, "{msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// Maps transport-level failures to a fixed per-operation message
    ///
    /// Server-reported messages and the unauthorized case pass through
    /// untouched, so callers see the backend's wording when one exists and
    /// the generic operation message otherwise.
    pub fn or_generic(self, fallback: &str) -> Self {
        match self {
            AppError::Api(_) | AppError::Unauthorized => self,
            _ => AppError::Api(fallback.to_string()),
        }
    }
}
