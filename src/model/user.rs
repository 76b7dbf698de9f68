use serde::{Deserialize, Serialize};

/// User profile as returned by the Bullana backend
///
/// Only `id`, `username` and `email` are guaranteed; the remaining fields
/// depend on the account state and the endpoint that produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub username: String,
    /// Registered email address
    pub email: String,
    /// Account status flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Two-factor authentication status flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfa_status: Option<i32>,
    /// KYC verification status flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<i32>,
    /// Favourite market identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favourites: Option<Vec<String>>,
    /// Liked item identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<Vec<String>>,
}
