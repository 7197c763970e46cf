use crate::storage::StorageError;

/// Terminal result of one unlock attempt.
///
/// Never an error: every failure mode a sensor session can produce
/// collapses into a value the guarded screen branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The user proved their identity; open the protected store.
    Granted,
    /// The session resolved without proof: wrong biometric, explicit
    /// cancel, or a sensor fault mid-session.
    Denied,
    /// No capable hardware; no session was opened.
    Unavailable,
}

/// Where one recovery-wipe protocol run terminated.
///
/// Ephemeral; exists only for the duration of a single
/// [`RecoveryWipeFlow::run`](super::RecoveryWipeFlow::run) and is never
/// persisted. `Confirmed` is the only transition that permits erasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeDecision {
    /// The user dismissed the initial warning.
    Cancelled,
    /// The device confirmed it has no passcode configured; wiping without a
    /// second factor is never allowed.
    PasscodeUnsupported,
    /// The passcode support query itself failed. Ambiguity never resolves
    /// toward the destructive action.
    PasscodeSupportUnknown,
    /// The OS passcode challenge was not passed.
    PasscodeDenied,
    /// Passcode verified, but the user declined the final confirmation.
    ConfirmationDeclined,
    /// Passcode verified and final confirmation accepted.
    Confirmed,
}

/// One deletion that failed during an already-confirmed wipe.
#[derive(Debug, Clone)]
pub struct WipeFailure {
    pub key: String,
    pub error: StorageError,
}

/// Result of a completed [`RecoveryWipeFlow::run`](super::RecoveryWipeFlow::run).
#[derive(Debug)]
pub enum WipeOutcome {
    /// The flow terminated before anything was erased. Never holds
    /// [`WipeDecision::Confirmed`].
    Declined(WipeDecision),
    /// The wipe ran. Deletion failures, if any, are reported here for the
    /// caller to log; the navigation reset has already been signaled.
    Wiped { failures: Vec<WipeFailure> },
}

impl WipeOutcome {
    pub fn wiped(&self) -> bool {
        matches!(self, Self::Wiped { .. })
    }
}
