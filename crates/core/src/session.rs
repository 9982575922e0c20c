//! Client-side key-value session.
//!
//! Login writes the username and the user blob the server returned; later
//! pages read the username to scope their requests. Nothing here is a
//! credential.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::Error;
use crate::result::Result;

/// Key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// Key holding the user document returned by login.
pub const USER_DATA_KEY: &str = "userData";

/// A string key-value store such as `window.localStorage`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `Storage` when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str);
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// Typed view over a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored username, if non-blank.
    pub fn username(&self) -> Option<String> {
        self.store
            .get(USERNAME_KEY)
            .filter(|name| !name.trim().is_empty())
    }

    /// The stored username or `fallback`.
    pub fn username_or(&self, fallback: &str) -> String {
        self.username().unwrap_or_else(|| fallback.to_string())
    }

    /// Remember who logged in.
    ///
    /// # Errors
    /// Returns `Storage` when the store rejects a write.
    pub fn set_user(&self, username: &str, blob: Option<&str>) -> Result<()> {
        self.store.set(USERNAME_KEY, username)?;
        match blob {
            Some(blob) => self.store.set(USER_DATA_KEY, blob),
            None => {
                self.store.remove(USER_DATA_KEY);
                Ok(())
            }
        }
    }

    /// Forget the current user.
    pub fn clear(&self) {
        self.store.remove(USERNAME_KEY);
        self.store.remove(USER_DATA_KEY);
    }
}
