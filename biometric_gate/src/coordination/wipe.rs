use std::sync::Arc;

use uuid::Uuid;

use crate::enablement::EnablementStore;
use crate::platform::{
    NavigationSignal, PasscodeChallenge, PasscodeResponse, PromptChoice, PromptRequest, UserPrompt,
};
use crate::storage::{KeyValueStore, ProtectedStoreHandle};

use super::types::{WipeDecision, WipeFailure, WipeOutcome};

const WARNING_TITLE: &str = "Secure storage";
const WARNING_MESSAGE: &str =
    "Biometric unlock can no longer verify your identity. You can remove the stored secret data and start over.";
const CONFIRM_MESSAGE: &str =
    "This will remove your saved secret data. This cannot be undone.";
const NO_PASSCODE_MESSAGE: &str =
    "A device passcode is required to remove stored data, and none is configured.";

/// The deliberate, double-confirmed path that erases the protected store.
///
/// Reachable only through an explicit user action; no failed-attempt
/// counter lives here. The protocol is strictly sequential and no step is
/// skippable: warning prompt, passcode-support check, OS passcode
/// challenge, final confirmation, and only then erasure. Every ambiguous
/// answer along the way resolves away from the destructive action.
pub struct RecoveryWipeFlow {
    store: Arc<dyn KeyValueStore>,
    enablement: EnablementStore,
    protected: ProtectedStoreHandle,
    passcode: Arc<dyn PasscodeChallenge>,
    navigation: Arc<dyn NavigationSignal>,
    prompt: Arc<dyn UserPrompt>,
}

impl RecoveryWipeFlow {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        enablement: EnablementStore,
        protected: ProtectedStoreHandle,
        passcode: Arc<dyn PasscodeChallenge>,
        navigation: Arc<dyn NavigationSignal>,
        prompt: Arc<dyn UserPrompt>,
    ) -> Self {
        Self {
            store,
            enablement,
            protected,
            passcode,
            navigation,
            prompt,
        }
    }

    /// Run the wipe protocol once.
    ///
    /// On a confirmed wipe the three deletions run in order (payload,
    /// companion, flag) and the navigation reset is signaled even when a
    /// deletion fails: a safe unauthenticated screen takes priority over
    /// reporting fidelity, so failures come back in the outcome instead of
    /// blocking it.
    pub async fn run(&self) -> WipeOutcome {
        let flow = Uuid::new_v4();

        match self.decide(flow).await {
            WipeDecision::Confirmed => {
                let failures = self.erase(flow).await;
                self.navigation.reset_to_unauthenticated_root();
                tracing::debug!(%flow, "Wipe completed, navigation reset to unauthenticated root");
                WipeOutcome::Wiped { failures }
            }
            declined => {
                tracing::debug!(%flow, ?declined, "Wipe flow ended without erasing");
                WipeOutcome::Declined(declined)
            }
        }
    }

    /// Walk the confirmation protocol up to (but not including) erasure.
    async fn decide(&self, flow: Uuid) -> WipeDecision {
        let warning = PromptRequest {
            title: WARNING_TITLE,
            message: WARNING_MESSAGE,
            confirm_label: "Proceed",
            cancel_label: "Cancel",
        };
        if self.prompt.confirm(warning).await == PromptChoice::Cancelled {
            // The unlock screen must not immediately re-fire the sensor the
            // user just backed out of.
            self.navigation.suppress_auto_unlock();
            return WipeDecision::Cancelled;
        }

        let supported = match self.passcode.is_supported().await {
            Ok(supported) => supported,
            Err(err) => {
                tracing::warn!(%flow, "Passcode support query failed, not proceeding: {err}");
                return WipeDecision::PasscodeSupportUnknown;
            }
        };
        if !supported {
            self.prompt.notice(WARNING_TITLE, NO_PASSCODE_MESSAGE).await;
            return WipeDecision::PasscodeUnsupported;
        }

        match self.passcode.authenticate().await {
            Ok(PasscodeResponse::Granted) => {}
            Ok(PasscodeResponse::Denied) => {
                tracing::debug!(%flow, "Passcode challenge denied");
                return WipeDecision::PasscodeDenied;
            }
            Err(err) => {
                tracing::warn!(%flow, "Passcode challenge fault, not proceeding: {err}");
                return WipeDecision::PasscodeDenied;
            }
        }

        let confirmation = PromptRequest {
            title: WARNING_TITLE,
            message: CONFIRM_MESSAGE,
            confirm_label: "Confirm",
            cancel_label: "Cancel",
        };
        match self.prompt.confirm(confirmation).await {
            PromptChoice::Confirmed => WipeDecision::Confirmed,
            PromptChoice::Cancelled => WipeDecision::ConfirmationDeclined,
        }
    }

    /// Erase payload, companion and flag, in that order, collecting rather
    /// than short-circuiting on failures.
    async fn erase(&self, flow: Uuid) -> Vec<WipeFailure> {
        let mut failures = Vec::new();

        for key in [self.protected.payload_key(), self.protected.companion_key()] {
            if let Err(err) = self.store.remove(key).await {
                tracing::error!(%flow, key, "Wipe deletion failed: {err}");
                failures.push(WipeFailure {
                    key: key.to_string(),
                    error: err,
                });
            }
        }

        if let Err(err) = self.enablement.clear().await {
            tracing::error!(%flow, key = self.enablement.key(), "Wipe deletion failed: {err}");
            failures.push(WipeFailure {
                key: self.enablement.key().to_string(),
                error: err,
            });
        }

        failures
    }
}
