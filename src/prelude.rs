//! # Bullana Auth Prelude
//!
//! Convenient re-exports of the types needed for most interactions with the
//! Bullana authentication API.
//!
//! ## Usage
//!
//! ```rust
//! use bullana_auth::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:13578");
//! let store = Arc::new(MemorySessionStore::new());
//! let auth = AuthService::new(config, store).expect("client construction");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the auth client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Operation trait and its default implementation
pub use crate::auth::{AuthApi, AuthService};

/// HTTP client and the unauthorized-redirect hook
pub use crate::client::{AuthHttpClient, Navigator, TracingNavigator};

// ============================================================================
// SESSION
// ============================================================================

/// Session persistence
pub use crate::session::store::{FileSessionStore, MemorySessionStore, SessionStore};

/// Local token expiry checks
pub use crate::session::token::{TokenClaims, decode_claims, is_token_valid};

// ============================================================================
// MODELS
// ============================================================================

/// User profile
pub use crate::model::user::User;

/// Request bodies
pub use crate::model::requests::{
    ChangePasswordRequest, CheckUserExistsRequest, ForgotPasswordRequest, LoginRequest,
    RegisterRequest, ResendVerificationRequest, ResetPasswordRequest, TfaCodeRequest,
    Verify2faRequest, VerifyRegistrationRequest,
};

/// Response models
pub use crate::model::responses::{
    LoginResponse, MessageResponse, ProfileResponse, RegisterOutcome, RegisterResponse,
    Setup2faResponse, ValidateResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
