//! `window.localStorage` as the session store.

use plantknight_core::SessionStore;
use web_sys::Storage;

use crate::error::{Result, UiError};

/// Session store over `window.localStorage`.
///
/// Holds no handle; every call looks storage up again, so a missing
/// `localStorage` (private mode, sandboxed iframe) degrades to "no session".
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or(UiError::BrowserUnavailable("window"))?
            .local_storage()?
            .ok_or(UiError::BrowserUnavailable("localStorage"))
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> plantknight_core::Result<()> {
        Self::storage()?.set_item(key, value).map_err(UiError::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Ok(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!(key, "could not remove session key: {}", UiError::from(e));
                }
            }
            Err(e) => tracing::warn!(key, "could not remove session key: {e}"),
        }
    }
}
