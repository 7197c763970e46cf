//! Error type for the coordination layer

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the coordination flows.
///
/// Most failure modes never appear here: capability faults and sensor
/// faults degrade to outcome values at the component boundary. What remains
/// is the one class the caller must not be allowed to miss (a flag write
/// that did not happen) and the refusal to enable gating on hardware that
/// cannot back it.
#[derive(Debug, Error)]
pub enum GateError {
    /// Biometric hardware is absent or currently unusable.
    #[error("Biometric hardware unavailable")]
    HardwareUnavailable,

    /// Error from the persisted flag store.
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl GateError {
    /// Log the error and return self, allowing method chaining at the point
    /// where the error is raised.
    pub fn log(self) -> Self {
        match &self {
            Self::HardwareUnavailable => tracing::error!("Biometric hardware unavailable"),
            Self::Storage(err) => tracing::error!("Storage error: {}", err),
        }
        self
    }
}

impl From<StorageError> for GateError {
    fn from(err: StorageError) -> Self {
        let error = Self::Storage(err);
        tracing::error!("{}", error);
        error
    }
}
