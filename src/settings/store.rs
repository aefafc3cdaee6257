//! Settings storage over a flat string key-value backend.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use log::warn;

use super::StoredSettings;
use super::TableSettings;
use crate::error::GridError;

/// Backend trait for settings storage.
///
/// A process-wide, durable, flat string key-value store with no transactional
/// or multi-key guarantees. Implementations handle raw string
/// storage/retrieval; [`SettingsStore`] wraps this with typed serialization.
pub trait SettingsBackend: Send + Sync {
    /// Get the stored string for a key.
    fn get(&self, key: &str) -> Result<Option<String>, GridError>;

    /// Set the stored string for a key, overwriting any prior value.
    fn set(&self, key: &str, value: String) -> Result<(), GridError>;
}

/// Typed settings store.
///
/// Wraps a [`SettingsBackend`] with JSON serialization of the whole
/// [`TableSettings`] value. Loads fail soft; saves report their error to the
/// caller, which logs and carries on.
#[derive(Clone)]
pub struct SettingsStore {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsStore {
    /// Creates a new settings store with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Loads the settings blob for a key.
    ///
    /// Never errors: a missing key, a backend failure, or an unparsable blob
    /// all yield an empty [`StoredSettings`], leaving seeding to structural
    /// defaults.
    pub fn load(&self, key: &str) -> StoredSettings {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return StoredSettings::default(),
            Err(err) => {
                warn!("settings load failed for {key}: {err}");
                return StoredSettings::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("discarding unparsable settings blob for {key}: {err}");
                StoredSettings::default()
            }
        }
    }

    /// Serializes and stores the whole settings value for a key.
    ///
    /// Last write wins; there are no partial or merge semantics.
    pub fn save(&self, key: &str, settings: &TableSettings) -> Result<(), GridError> {
        let blob = serde_json::to_string(settings)?;
        self.backend.set(key, blob)
    }
}

/// An in-memory settings backend.
///
/// Durable only for the life of the process; the default choice for tests and
/// for hosts that wire persistence elsewhere.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, GridError> {
        let store = self
            .store
            .lock()
            .map_err(|_| GridError::backend("settings store poisoned"))?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), GridError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| GridError::backend("settings store poisoned"))?;
        store.insert(key.to_string(), value);
        Ok(())
    }
}

impl SettingsBackend for Arc<MemoryBackend> {
    fn get(&self, key: &str) -> Result<Option<String>, GridError> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), GridError> {
        self.as_ref().set(key, value)
    }
}
