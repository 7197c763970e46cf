use async_trait::async_trait;

use super::errors::PlatformError;
use super::types::{SensorKind, SensorResponse};

/// Driver for the platform biometric sensor.
///
/// Absence is an answer, not an error: `is_available` and `sensor_kind`
/// return their negative value when no usable sensor exists and reserve
/// `Err` for unexpected platform faults. At most one authentication session
/// may be in flight at a time; callers own that exclusivity.
#[async_trait]
pub trait SensorProvider: Send + Sync {
    /// Whether a biometric sensor is present and currently usable.
    async fn is_available(&self) -> Result<bool, PlatformError>;

    /// Which sensor modality is present, `None` when there is none.
    async fn sensor_kind(&self) -> Result<Option<SensorKind>, PlatformError>;

    /// Open an authentication session, show `description` to the user and
    /// suspend until the session resolves with a single response.
    async fn authenticate(&self, description: &str) -> Result<SensorResponse, PlatformError>;

    /// Close the current session. Idempotent; always safe to call.
    async fn release(&self);
}
