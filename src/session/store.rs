//! Session persistence
//!
//! The session store holds two pieces of state under fixed keys: the bearer
//! token and the serialized user profile. Presence of a token means
//! "possibly authenticated"; absence means "not authenticated". The store is
//! injected into the client rather than held as module-level state, so tests
//! can run against isolated instances.
//!
//! Store operations are synchronous and do not surface failures: the
//! file-backed implementation logs I/O problems and carries on, mirroring
//! how browser storage is used without quota handling.

use crate::constants::{TOKEN_KEY, USER_KEY, WALLET_KEY};
use crate::model::user::User;
use nanoid::nanoid;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Key-value holder for the session token and cached user profile
pub trait SessionStore: Send + Sync {
    /// Stores the bearer token
    fn set_token(&self, token: &str);
    /// Returns the stored bearer token, if any
    fn token(&self) -> Option<String>;
    /// Removes the bearer token
    fn remove_token(&self);
    /// Stores the cached user profile as serialized JSON
    fn set_user(&self, user: &User);
    /// Returns the cached user profile, if any
    fn user(&self) -> Option<User>;
    /// Clears token, user data and the legacy wallet entry
    fn clear_all(&self);
}

/// In-memory session store
///
/// Entries live behind an `RwLock`; last writer wins. This is the store of
/// choice for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(key);
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn set_token(&self, token: &str) {
        self.put(TOKEN_KEY, token.to_string());
    }

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn remove_token(&self) {
        self.remove(TOKEN_KEY);
    }

    fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.put(USER_KEY, json),
            Err(e) => warn!("Failed to serialize user for storage: {e}"),
        }
    }

    fn user(&self) -> Option<User> {
        let json = self.get(USER_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Failed to parse stored user data: {e}");
                None
            }
        }
    }

    fn clear_all(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
        self.remove(WALLET_KEY);
        debug!("All authentication data cleared");
    }
}

/// File-backed session store
///
/// Persists the key-value entries as a JSON object at the configured path.
/// Every mutation writes through synchronously via a uniquely named temp
/// file followed by a rename, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Opens a file-backed store, loading existing entries if the file exists
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn load(path: &PathBuf) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Session file {} is not valid JSON: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        }
    }

    fn persist(&self, map: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(map) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize session entries: {e}");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Failed to create session directory: {e}");
            return;
        }

        let tmp = self.path.with_extension(format!("tmp-{}", nanoid!(8)));
        if let Err(e) = fs::write(&tmp, json) {
            warn!("Failed to write session file {}: {e}", tmp.display());
            return;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            warn!("Failed to replace session file {}: {e}", self.path.display());
            let _ = fs::remove_file(&tmp);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), value);
            self.persist(&map);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(key);
            self.persist(&map);
        }
    }
}

impl SessionStore for FileSessionStore {
    fn set_token(&self, token: &str) {
        self.put(TOKEN_KEY, token.to_string());
    }

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn remove_token(&self) {
        self.remove(TOKEN_KEY);
    }

    fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.put(USER_KEY, json),
            Err(e) => warn!("Failed to serialize user for storage: {e}"),
        }
    }

    fn user(&self) -> Option<User> {
        let json = self.get(USER_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Failed to parse stored user data: {e}");
                None
            }
        }
    }

    fn clear_all(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(TOKEN_KEY);
            map.remove(USER_KEY);
            map.remove(WALLET_KEY);
            self.persist(&map);
        }
        debug!("All authentication data cleared");
    }
}
