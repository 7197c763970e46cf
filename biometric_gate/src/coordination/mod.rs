//! Composition of the leaf services into the two user-facing flows: the
//! unlock gate and the destructive recovery wipe.

mod errors;
mod types;
mod unlock;
mod wipe;

pub use errors::GateError;
pub use types::{UnlockOutcome, WipeDecision, WipeFailure, WipeOutcome};
pub use unlock::UnlockOrchestrator;
pub use wipe::RecoveryWipeFlow;
