use async_trait::async_trait;

use crate::config;

use super::errors::StorageError;

/// Generic persisted key-value store.
///
/// `get` returning `Ok(None)` means the key has never been written; that is
/// an answer, not an error. Operations are independent and non-transactional;
/// no multi-key atomicity is assumed anywhere in this crate.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Erase `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Opaque reference to the encrypted secret payload and its encrypted
/// companion blob.
///
/// The gate never reads either key; it only names them to the store when a
/// confirmed recovery wipe erases them.
#[derive(Debug, Clone)]
pub struct ProtectedStoreHandle {
    payload_key: String,
    companion_key: String,
}

impl ProtectedStoreHandle {
    pub fn new(payload_key: impl Into<String>, companion_key: impl Into<String>) -> Self {
        Self {
            payload_key: payload_key.into(),
            companion_key: companion_key.into(),
        }
    }

    /// Handle using the configured default key names.
    pub fn from_config() -> Self {
        Self::new(config::SECRET_KEY.as_str(), config::SECRET_COMPANION_KEY.as_str())
    }

    pub fn payload_key(&self) -> &str {
        &self.payload_key
    }

    pub fn companion_key(&self) -> &str {
        &self.companion_key
    }
}
