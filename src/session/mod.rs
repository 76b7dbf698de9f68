/// Session persistence behind the `SessionStore` trait
pub mod store;
/// Local bearer-token expiry checks
pub mod token;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use token::{decode_claims, is_token_valid};
