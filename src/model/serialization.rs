//! Serde helpers for legacy wire quirks
//!
//! The signup endpoint reports success as either a boolean or a numeric
//! flag depending on the backend version; `success_flag` accepts both so
//! `1` and `true` deserialize identically.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a success flag that may arrive as a bool or a number
///
/// `true` and any non-zero number map to `true`; everything else, including
/// a missing field, maps to `false`.
pub fn success_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}
