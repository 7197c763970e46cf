//! The user's persisted opt-in for biometric gating.

mod store;

pub use store::EnablementStore;
