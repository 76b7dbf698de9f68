//! Local bearer-token expiry checks
//!
//! The backend issues JWTs; the client only reads the `exp` claim from the
//! payload segment to decide whether a stored token is still worth sending.
//! The signature is never verified here, so this is an optimistic check, not
//! a security boundary. Any token that does not decode cleanly is treated as
//! not authenticated.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

/// Claims read from the token payload
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Expiry as seconds since the Unix epoch
    pub exp: i64,
    /// Subject (user id), when present
    #[serde(default)]
    pub sub: Option<String>,
}

/// Decodes the payload segment of a JWT without verifying the signature
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url-encoded JSON payload carrying an `exp` claim.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    segments.next()?;

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!("Token payload is not valid claims JSON: {e}");
            None
        }
    }
}

/// Returns `true` only for a well-formed token whose expiry is in the future
pub fn is_token_valid(token: &str) -> bool {
    match decode_claims(token) {
        Some(claims) => claims.exp > Utc::now().timestamp(),
        None => false,
    }
}
