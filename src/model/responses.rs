use crate::model::serialization::success_flag;
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from login, 2FA verification and registration verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted
    #[serde(default)]
    pub success: bool,
    /// Session bearer token, present once fully authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// User profile, present once fully authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Set when the account requires a second factor to finish login
    #[serde(rename = "requiresTFA", default)]
    pub requires_tfa: bool,
    /// Temporary token to present to the 2FA verification endpoint
    #[serde(rename = "tempToken", default, skip_serializing_if = "Option::is_none")]
    pub temp_token: Option<String>,
    /// Informational message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from the profile endpoints (GET and PUT /basic/auth/profile)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Whether the request was accepted
    #[serde(default)]
    pub success: bool,
    /// Current user profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Informational message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from GET /basic/auth/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Whether the presented token is still valid server-side
    #[serde(default)]
    pub valid: bool,
}

/// Raw response from POST /basic/signup before normalization
///
/// The success flag arrives as a bool or a number depending on the backend
/// version; unknown fields are preserved in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    /// Legacy success flag, normalized from `true`/`1`
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    /// Primary message field
    #[serde(default)]
    pub msg: Option<String>,
    /// Secondary message field, used when `msg` is absent
    #[serde(default)]
    pub message: Option<String>,
    /// Any remaining body fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegisterResponse {
    /// Message with `msg` taking priority over `message`
    pub fn text(&self) -> Option<String> {
        self.msg.clone().or_else(|| self.message.clone())
    }
}

/// Normalized signup outcome handed to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterOutcome {
    /// Always `true`; failed signups surface as errors instead
    pub success: bool,
    /// Message reported by the backend, when any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The raw response body for callers that need the details
    pub data: Value,
}

/// Generic message-bearing response used by the thin endpoints
///
/// Covers check-user-exists, resend-verification, forgot/reset password,
/// change-password and the 2FA management calls. Fields beyond the message
/// pair are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Success flag, tolerant of the bool/number drift
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    /// Primary message field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Secondary message field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any remaining body fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageResponse {
    /// Message with `msg` taking priority over `message`
    pub fn text(&self) -> Option<String> {
        self.msg.clone().or_else(|| self.message.clone())
    }
}

/// Response from POST /basic/auth/setup-2fa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setup2faResponse {
    /// Whether setup material was issued
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    /// Shared secret to load into the authenticator app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Informational message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any remaining body fields (QR payloads and the like)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
