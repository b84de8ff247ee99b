//! Key-value settings store used for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive a `SettingsStore` instead of touching `localStorage`
//! directly, so the browser glue lives in one place and tests can substitute
//! an in-memory store.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure to persist a setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("settings storage is unavailable")]
    Unavailable,
    #[error("failed to write setting `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value store. Reads that fail are reported as missing values.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when the backing storage is missing or rejects
    /// the write (quota, privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// `window.localStorage`. Without the `hydrate` feature every read misses and
/// every write reports `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SettingsStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SettingsError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| SettingsError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SettingsError::Unavailable)
        }
    }
}

/// Process-local store. Used during SSR and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        }
        store
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.values.lock().map_err(|e| SettingsError::Write {
            key: key.to_owned(),
            reason: e.to_string(),
        })?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store used when the host does not inject one.
pub fn default_store() -> Arc<dyn SettingsStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStore::new())
    }
}
