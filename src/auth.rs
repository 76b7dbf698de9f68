//! Authentication operations for the Bullana API
//!
//! [`AuthService`] implements the full operation set as thin wrappers: each
//! method issues one HTTP call with a fixed method, path and payload shape,
//! optionally updates the injected session store, and surfaces failures as
//! [`AppError`] values carrying the backend's message when one exists.
//!
//! Session side effects:
//! - `login`, `verify_2fa` and `verify_registration` store the token and
//!   user together on success.
//! - `get_current_user`, `refresh_user` and `update_profile` refresh the
//!   cached user.
//! - `logout` always clears the local session, whether or not the remote
//!   revoke call succeeds.

use crate::client::{AuthHttpClient, Navigator, TracingNavigator};
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::{
    ChangePasswordRequest, CheckUserExistsRequest, ForgotPasswordRequest, LoginRequest,
    RegisterRequest, ResendVerificationRequest, ResetPasswordRequest, TfaCodeRequest,
    Verify2faRequest, VerifyRegistrationRequest,
};
use crate::model::responses::{
    LoginResponse, MessageResponse, ProfileResponse, RegisterOutcome, RegisterResponse,
    Setup2faResponse, ValidateResponse,
};
use crate::model::user::User;
use crate::session::store::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::session::token::is_token_valid;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Operations against the Bullana authentication API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Logs in with email and password
    ///
    /// On success without a pending second factor, the returned token and
    /// user are stored together. When `requires_tfa` is set, the caller
    /// should follow up with [`AuthApi::verify_2fa`] using `temp_token`.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// Verifies a 2FA code against the temporary token from login
    async fn verify_2fa(
        &self,
        temp_token: &str,
        tfa_code: &str,
    ) -> Result<LoginResponse, AppError>;

    /// Fetches the current user profile and refreshes the cached copy
    async fn get_current_user(&self) -> Result<ProfileResponse, AppError>;

    /// Logs out: best-effort remote revoke, unconditional local cleanup
    ///
    /// The remote call is bounded by the configured request timeout and its
    /// outcome is ignored; the local session is cleared in every case, so
    /// this operation never fails.
    async fn logout(&self);

    /// Asks the backend whether the stored token is still valid
    ///
    /// Failures are swallowed and reported as `false`.
    async fn validate_token(&self) -> bool;

    /// Registers a new user
    ///
    /// Normalizes the legacy success flag (`1` and `true` are equivalent)
    /// and surfaces `msg` over `message`. A reported failure becomes an
    /// error rather than a failure-shaped response.
    async fn register(&self, data: RegisterRequest) -> Result<RegisterOutcome, AppError>;

    /// Checks whether an email or username is already taken
    async fn check_user_exists(
        &self,
        email: &str,
        username: &str,
    ) -> Result<MessageResponse, AppError>;

    /// Verifies a registration email with the code sent to it
    ///
    /// When the backend returns a token and user, both are stored.
    async fn verify_registration(
        &self,
        email: &str,
        verification_code: &str,
    ) -> Result<LoginResponse, AppError>;

    /// Resends the registration verification code
    async fn resend_verification_code(&self, email: &str) -> Result<MessageResponse, AppError>;

    /// Starts a password reset for the given email
    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, AppError>;

    /// Completes a password reset with the token from the reset email
    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, AppError>;

    /// Updates the user profile; the cached user is refreshed on success
    async fn update_profile(&self, profile: Value) -> Result<ProfileResponse, AppError>;

    /// Changes the account password
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, AppError>;

    /// Begins 2FA enrollment, returning the shared secret material
    async fn setup_2fa(&self) -> Result<Setup2faResponse, AppError>;

    /// Confirms 2FA enrollment with a code from the authenticator app
    async fn verify_2fa_setup(&self, tfa_code: &str) -> Result<MessageResponse, AppError>;

    /// Disables 2FA with a current code
    async fn disable_2fa(&self, tfa_code: &str) -> Result<MessageResponse, AppError>;

    /// Re-fetches the user profile and returns it
    async fn refresh_user(&self) -> Result<User, AppError>;

    /// Local check: a token is stored and its expiry claim is in the future
    ///
    /// Optimistic only; the signature is not verified.
    fn is_authenticated(&self) -> bool;
}

/// Default [`AuthApi`] implementation over [`AuthHttpClient`]
pub struct AuthService {
    client: AuthHttpClient,
    store: Arc<dyn SessionStore>,
    config: Arc<Config>,
}

impl AuthService {
    /// Creates a service with the default logging navigator
    ///
    /// # Arguments
    /// * `config` - Base URL, timeout and login route settings
    /// * `store` - Session store shared with the rest of the application
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        Self::with_navigator(config, store, Arc::new(TracingNavigator))
    }

    /// Creates a service whose store is selected by the configuration
    ///
    /// When `session_file` is set (via `BULLANA_SESSION_FILE` or directly),
    /// the session persists to that path through a [`FileSessionStore`];
    /// otherwise a fresh [`MemorySessionStore`] is used.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(FileSessionStore::new(path)),
            None => Arc::new(MemorySessionStore::new()),
        };
        Self::new(config, store)
    }

    /// Creates a service with an explicit unauthorized-redirect hook
    pub fn with_navigator(
        config: Config,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let client = AuthHttpClient::new(config.clone(), store.clone(), navigator)?;
        Ok(Self {
            client,
            store,
            config,
        })
    }

    /// Gets the session store backing this service
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Gets the underlying HTTP client
    pub fn client(&self) -> &AuthHttpClient {
        &self.client
    }

    fn store_session(&self, token: &str, user: &User) {
        self.store.set_token(token);
        self.store.set_user(user);
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .client
            .post("/basic/auth/login", body)
            .await
            .map_err(|e| e.or_generic("Login failed"))?;

        if response.success
            && !response.requires_tfa
            && let (Some(token), Some(user)) = (&response.token, &response.user)
        {
            self.store_session(token, user);
            info!("Login successful, user: {}", user.username);
        }

        Ok(response)
    }

    async fn verify_2fa(
        &self,
        temp_token: &str,
        tfa_code: &str,
    ) -> Result<LoginResponse, AppError> {
        let body = Verify2faRequest {
            temp_token: temp_token.to_string(),
            tfa_code: tfa_code.to_string(),
        };

        let response: LoginResponse = self
            .client
            .post("/basic/auth/verify-2fa", body)
            .await
            .map_err(|e| e.or_generic("2FA verification failed"))?;

        if response.success
            && let (Some(token), Some(user)) = (&response.token, &response.user)
        {
            self.store_session(token, user);
            info!("2FA verified, user: {}", user.username);
        }

        Ok(response)
    }

    async fn get_current_user(&self) -> Result<ProfileResponse, AppError> {
        let response: ProfileResponse = self
            .client
            .get("/basic/auth/profile")
            .await
            .map_err(|e| e.or_generic("Failed to get user profile"))?;

        if let Some(user) = &response.user {
            self.store.set_user(user);
        }

        Ok(response)
    }

    async fn logout(&self) {
        info!("Logging out");

        let remote = self
            .client
            .post_empty::<MessageResponse>("/basic/auth/logout");
        let timeout = Duration::from_secs(self.config.rest_api.timeout);

        match tokio::time::timeout(timeout, remote).await {
            Ok(Ok(_)) => debug!("Remote logout acknowledged"),
            Ok(Err(e)) => warn!("Logout API call failed: {e}"),
            Err(_) => warn!("Logout API call timed out"),
        }

        // Local cleanup runs regardless of the remote outcome
        self.store.clear_all();
    }

    async fn validate_token(&self) -> bool {
        match self.client.get::<ValidateResponse>("/basic/auth/validate").await {
            Ok(response) => response.valid,
            Err(e) => {
                debug!("Token validation failed: {e}");
                false
            }
        }
    }

    async fn register(&self, data: RegisterRequest) -> Result<RegisterOutcome, AppError> {
        let raw: Value = self
            .client
            .post("/basic/signup", data)
            .await
            .map_err(|e| e.or_generic("Registration failed - Network or server error"))?;

        let parsed: RegisterResponse = serde_json::from_value(raw.clone())?;
        let message = parsed.text();

        if parsed.success {
            info!("Registration successful");
            Ok(RegisterOutcome {
                success: true,
                message,
                data: raw,
            })
        } else {
            Err(AppError::Api(
                message.unwrap_or_else(|| String::from("Registration failed")),
            ))
        }
    }

    async fn check_user_exists(
        &self,
        email: &str,
        username: &str,
    ) -> Result<MessageResponse, AppError> {
        let body = CheckUserExistsRequest {
            email: email.to_string(),
            username: username.to_string(),
        };

        self.client
            .post("/basic/check-user-exists", body)
            .await
            .map_err(|e| e.or_generic("Failed to check user existence"))
    }

    async fn verify_registration(
        &self,
        email: &str,
        verification_code: &str,
    ) -> Result<LoginResponse, AppError> {
        let body = VerifyRegistrationRequest {
            email: email.to_string(),
            verification_code: verification_code.to_string(),
        };

        let response: LoginResponse = self
            .client
            .post("/basic/verify-registration", body)
            .await
            .map_err(|e| e.or_generic("Email verification failed"))?;

        if response.success
            && let (Some(token), Some(user)) = (&response.token, &response.user)
        {
            self.store_session(token, user);
            info!("Registration verified, user: {}", user.username);
        }

        Ok(response)
    }

    async fn resend_verification_code(&self, email: &str) -> Result<MessageResponse, AppError> {
        let body = ResendVerificationRequest {
            email: email.to_string(),
        };

        self.client
            .post("/basic/resend-verification", body)
            .await
            .map_err(|e| e.or_generic("Failed to resend verification code"))
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, AppError> {
        let body = ForgotPasswordRequest {
            resetemail: email.to_string(),
        };

        self.client
            .post("/basic/forgotPassword", body)
            .await
            .map_err(|e| e.or_generic("Password reset failed"))
    }

    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, AppError> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };

        self.client
            .post("/basic/resetPassword", body)
            .await
            .map_err(|e| e.or_generic("Password reset failed"))
    }

    async fn update_profile(&self, profile: Value) -> Result<ProfileResponse, AppError> {
        let response: ProfileResponse = self
            .client
            .put("/basic/auth/profile", profile)
            .await
            .map_err(|e| e.or_generic("Profile update failed"))?;

        if response.success
            && let Some(user) = &response.user
        {
            self.store.set_user(user);
        }

        Ok(response)
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, AppError> {
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };

        self.client
            .post("/basic/auth/change-password", body)
            .await
            .map_err(|e| e.or_generic("Password change failed"))
    }

    async fn setup_2fa(&self) -> Result<Setup2faResponse, AppError> {
        self.client
            .post_empty("/basic/auth/setup-2fa")
            .await
            .map_err(|e| e.or_generic("2FA setup failed"))
    }

    async fn verify_2fa_setup(&self, tfa_code: &str) -> Result<MessageResponse, AppError> {
        let body = TfaCodeRequest {
            tfa_code: tfa_code.to_string(),
        };

        self.client
            .post("/basic/auth/verify-2fa-setup", body)
            .await
            .map_err(|e| e.or_generic("2FA verification failed"))
    }

    async fn disable_2fa(&self, tfa_code: &str) -> Result<MessageResponse, AppError> {
        let body = TfaCodeRequest {
            tfa_code: tfa_code.to_string(),
        };

        self.client
            .post("/basic/auth/disable-2fa", body)
            .await
            .map_err(|e| e.or_generic("2FA disable failed"))
    }

    async fn refresh_user(&self) -> Result<User, AppError> {
        let response = self
            .get_current_user()
            .await
            .map_err(|e| e.or_generic("Failed to refresh user data"))?;

        response
            .user
            .ok_or_else(|| AppError::Api(String::from("Failed to refresh user data")))
    }

    fn is_authenticated(&self) -> bool {
        match self.store.token() {
            Some(token) => is_token_valid(&token),
            None => false,
        }
    }
}
