use crate::platform::{SensorKind, SensorProvider};

use super::types::CapabilityState;

/// Query whether biometric hardware is present and currently usable.
///
/// Queries the sensor driver once per call; results are never cached. A
/// clean "no sensor" answer and an unexpected driver fault both come back
/// as [`CapabilityState::NotCapable`]; callers treat that as the universal
/// "cannot proceed with biometrics" signal, including when the user opted
/// in under hardware that has since been removed or revoked.
pub async fn probe(sensor: &dyn SensorProvider) -> CapabilityState {
    match sensor.is_available().await {
        Ok(true) => CapabilityState::Capable,
        Ok(false) => CapabilityState::NotCapable,
        Err(err) => {
            tracing::warn!("Capability probe fault, treating sensor as not capable: {err}");
            CapabilityState::NotCapable
        }
    }
}

/// Which sensor modality is present, `None` when there is none or the
/// driver faulted.
pub async fn sensor_kind(sensor: &dyn SensorProvider) -> Option<SensorKind> {
    match sensor.sensor_kind().await {
        Ok(kind) => kind,
        Err(err) => {
            tracing::warn!("Sensor kind query fault: {err}");
            None
        }
    }
}
