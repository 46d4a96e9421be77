//! Browser Storage
//!
//! Thin wrapper over `window.localStorage` for the bearer token and UI
//! preferences.

/// localStorage accessor; every call re-resolves the window
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn local() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
        window
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| "Storage not available".to_string())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage().ok()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = ?e, "failed to read from storage");
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| format!("Failed to set item in storage '{}': {:?}", key, e))
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e))
    }
}

/// The persisted bearer token under the configured key
#[derive(Clone, Debug)]
pub struct TokenStorage {
    key: String,
    storage: BrowserStorage,
}

impl TokenStorage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            storage: BrowserStorage::local(),
        }
    }

    /// Stored token, ignoring blank values
    pub fn get(&self) -> Option<String> {
        self.storage
            .get(&self.key)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set(&self, token: &str) -> Result<(), String> {
        self.storage.set(&self.key, token.trim())
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(error = %e, "failed to clear session token");
        }
    }
}
