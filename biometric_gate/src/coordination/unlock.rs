use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::capability::{self, CapabilityState};
use crate::config;
use crate::enablement::EnablementStore;
use crate::platform::{SensorKind, SensorProvider, SensorResponse};

use super::errors::GateError;
use super::types::UnlockOutcome;

/// Composes the capability probe and the enablement flag into the biometric
/// gate, and runs the unlock challenge itself.
///
/// Owns no retry policy and no attempt counter: every call to
/// [`unlock`](Self::unlock) is a fully independent attempt, and a caller
/// wanting several attempts simply calls again. Threshold-driven recovery
/// is the caller's policy, applied by invoking
/// [`RecoveryWipeFlow`](super::RecoveryWipeFlow) once its threshold is
/// reached.
pub struct UnlockOrchestrator {
    sensor: Arc<dyn SensorProvider>,
    enablement: EnablementStore,
    /// Serializes sensor sessions: held from session open through release.
    session: Mutex<()>,
}

impl UnlockOrchestrator {
    pub fn new(sensor: Arc<dyn SensorProvider>, enablement: EnablementStore) -> Self {
        Self {
            sensor,
            enablement,
            session: Mutex::new(()),
        }
    }

    /// Whether the biometric gate currently guards the protected store.
    ///
    /// `true` iff the user opted in AND a capable sensor is present right
    /// now. Both sub-checks are evaluated fresh on every call; nothing here
    /// is memoized. A flag left `true` by hardware that has since been
    /// revoked simply yields `false`.
    pub async fn is_gate_active(&self) -> bool {
        let enabled = self.enablement.read().await;
        let capable = capability::probe(self.sensor.as_ref()).await.is_capable();
        enabled && capable
    }

    /// Which sensor modality would run the challenge, for callers labeling
    /// their unlock affordance.
    pub async fn sensor_kind(&self) -> Option<SensorKind> {
        capability::sensor_kind(self.sensor.as_ref()).await
    }

    /// Persist the user's opt-in choice.
    ///
    /// Enabling requires a currently capable sensor: the flag may only ever
    /// become `true` after a successful probe. Disabling needs no hardware
    /// at all. Write failures surface to the caller.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), GateError> {
        if enabled && !capability::probe(self.sensor.as_ref()).await.is_capable() {
            return Err(GateError::HardwareUnavailable.log());
        }
        self.enablement.write(enabled).await?;
        tracing::debug!("Biometric gating {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    /// Run one unlock challenge against the sensor.
    ///
    /// Opens at most one session: if the capability probe comes back
    /// negative the sensor is never touched and the outcome is
    /// [`UnlockOutcome::Unavailable`]. Otherwise exactly one session runs
    /// to its natural completion (the platform sensor API exposes no
    /// mid-session cancellation, so none is fabricated here) and the
    /// session is released on every exit path before the outcome is
    /// returned.
    pub async fn unlock(&self) -> UnlockOutcome {
        let attempt = Uuid::new_v4();

        if capability::probe(self.sensor.as_ref()).await == CapabilityState::NotCapable {
            tracing::debug!(%attempt, "Unlock unavailable: no capable sensor");
            return UnlockOutcome::Unavailable;
        }

        // One session at a time; the guard spans open through release.
        let _session = self.session.lock().await;
        let verdict = self.sensor.authenticate(config::UNLOCK_PROMPT.as_str()).await;
        // Release is unconditional: success, denial and fault all pass here.
        self.sensor.release().await;

        match verdict {
            Ok(SensorResponse::Granted) => {
                tracing::debug!(%attempt, "Unlock granted");
                UnlockOutcome::Granted
            }
            Ok(SensorResponse::Denied) => {
                tracing::debug!(%attempt, "Unlock denied");
                UnlockOutcome::Denied
            }
            Err(err) => {
                tracing::warn!(%attempt, "Sensor fault during authentication: {err}");
                UnlockOutcome::Denied
            }
        }
    }

    /// The enablement flag service this orchestrator mutates.
    pub fn enablement(&self) -> &EnablementStore {
        &self.enablement
    }
}
