use std::sync::Arc;

use crate::config;
use crate::storage::{KeyValueStore, StorageError};

const ENABLED_VALUE: &str = "1";
const DISABLED_VALUE: &str = "";

/// Owner of the persisted biometric opt-in flag.
///
/// Reads are fail-closed: an absent key, an unrecognized stored value and a
/// failing read all decode to disabled. When in doubt the store never
/// claims biometrics are enabled. Writes surface their failure, since a
/// silently lost disable could strand the user in a broken enabled state.
#[derive(Clone)]
pub struct EnablementStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl EnablementStore {
    /// Store using the configured flag key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, config::ENABLEMENT_KEY.as_str())
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Whether the user has opted in. Defaults to `false` when unset or the
    /// read fails.
    pub async fn read(&self) -> bool {
        match self.store.get(&self.key).await {
            Ok(value) => decode(value.as_deref()),
            Err(err) => {
                tracing::warn!("Enablement flag read failed, treating as disabled: {err}");
                false
            }
        }
    }

    pub async fn write(&self, enabled: bool) -> Result<(), StorageError> {
        let value = if enabled { ENABLED_VALUE } else { DISABLED_VALUE };
        self.store.set(&self.key, value).await
    }

    /// Erase the flag entirely, as a recovery wipe does.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn decode(value: Option<&str>) -> bool {
    matches!(value, Some(ENABLED_VALUE))
}
