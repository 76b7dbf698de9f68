/// Request bodies for the auth endpoints
pub mod requests;
/// Response models from the auth endpoints
pub mod responses;
/// Serde helpers for legacy wire quirks
pub mod serialization;
/// User profile model
pub mod user;
