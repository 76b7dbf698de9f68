use serde::{Deserialize, Serialize};

/// Body for POST /basic/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Registered email address
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body for POST /basic/auth/verify-2fa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verify2faRequest {
    /// Temporary token issued by the login step
    #[serde(rename = "tempToken")]
    pub temp_token: String,
    /// Short-lived 2FA code
    #[serde(rename = "tfaCode")]
    pub tfa_code: String,
}

/// Body for POST /basic/signup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username
    pub username: String,
    /// Email address to register
    pub email: String,
    /// Account password
    pub password: String,
    /// Optional referral code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refer: Option<String>,
    /// Optional wallet address to link at signup
    #[serde(
        rename = "walletAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wallet_address: Option<String>,
    /// Wallet type matching the address, when one is given
    #[serde(rename = "walletType", default, skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<String>,
}

/// Body for POST /basic/check-user-exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUserExistsRequest {
    /// Email address to check
    pub email: String,
    /// Username to check
    pub username: String,
}

/// Body for POST /basic/verify-registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRegistrationRequest {
    /// Email address being verified
    pub email: String,
    /// Code received by email
    #[serde(rename = "verificationCode")]
    pub verification_code: String,
}

/// Body for POST /basic/resend-verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    /// Email address to resend the code to
    pub email: String,
}

/// Body for POST /basic/forgotPassword
///
/// The backend expects the legacy `resetemail` field name here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Email address to send the reset link to
    pub resetemail: String,
}

/// Body for POST /basic/resetPassword
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Reset token from the password-reset email
    pub token: String,
    /// Replacement password
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Body for POST /basic/auth/change-password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password for re-authentication
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    /// Replacement password
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Body for the 2FA setup verification and disable endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfaCodeRequest {
    /// Short-lived 2FA code
    #[serde(rename = "tfaCode")]
    pub tfa_code: String,
}
