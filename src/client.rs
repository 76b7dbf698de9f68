//! HTTP client for the Bullana auth API
//!
//! Wraps a single `reqwest` client bound to the configured base URL and
//! applies the two cross-cutting behaviors every call shares:
//! - outbound: when the session store holds a token, it is attached as a
//!   bearer credential;
//! - inbound: a `401 Unauthorized` response clears the session store and
//!   points the navigator at the login route before the error propagates.
//!
//! All requests carry a fixed timeout (10 seconds by default) enforced by
//! the underlying transport. There are no retries.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::store::SessionStore;
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Hook invoked when a request comes back unauthorized
///
/// The browser original redirects `window.location` to the login page; here
/// the target route is handed to whatever navigation the host application
/// uses. The default implementation only logs.
pub trait Navigator: Send + Sync {
    /// Called with the login route after the session has been cleared
    fn redirect(&self, route: &str);
}

/// Default navigator that records the redirect in the log
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn redirect(&self, route: &str) {
        warn!("Session expired, redirecting to {route}");
    }
}

/// HTTP client bound to one base URL with bearer-token handling
pub struct AuthHttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthHttpClient {
    /// Creates a client for the given configuration and session store
    ///
    /// # Returns
    /// * `Ok(AuthHttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(
        config: Arc<Config>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
            store,
            navigator,
        })
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::POST, path, None::<()>).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a request and deserializes the response body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.request_internal(method, path, &body).await?;
        self.parse_response(response).await
    }

    /// Internal method to build, send and status-check a request
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        };

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(token) = self.store.token() {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body_text);
            self.store.clear_all();
            self.navigator.redirect(&self.config.login_route);
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            return match extract_error_message(&body_text) {
                Some(msg) => Err(AppError::Api(msg)),
                None => Err(AppError::Unexpected(status)),
            };
        }

        Ok(response)
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }

    /// Gets a reference to the session store backing this client
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Gets the configuration backing this client
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// Extracts a human-readable message from an error response body
///
/// Fallback chain: the `msg` field, else `message`, else the body itself.
/// Returns `None` only for an empty body, in which case callers fall back
/// to a generic per-operation message.
pub fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let from_field = value
                .get("msg")
                .and_then(Value::as_str)
                .or_else(|| value.get("message").and_then(Value::as_str))
                .map(String::from);
            Some(from_field.unwrap_or_else(|| value.to_string()))
        }
        Err(_) => Some(body.to_string()),
    }
}
