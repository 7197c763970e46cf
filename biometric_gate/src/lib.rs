//! biometric-gate - Biometric unlock gating for device secret stores
//!
//! This crate decides whether a biometric challenge guards the protected
//! secret store, runs that challenge against the platform sensor, and owns
//! the deliberate, passcode-verified recovery path that wipes the store
//! when biometric unlock can no longer be trusted.
//!
//! The host application provides the platform: implementations of the
//! [`SensorProvider`], [`PasscodeChallenge`], [`NavigationSignal`],
//! [`UserPrompt`] and [`KeyValueStore`] contracts. The crate composes them;
//! it renders nothing and persists nothing of its own.

mod capability;
mod config;
mod coordination;
mod enablement;
mod platform;
mod rates;
mod storage;

#[cfg(test)]
mod test_utils;

// Re-export the main coordination components
pub use coordination::{
    GateError, RecoveryWipeFlow, UnlockOrchestrator, UnlockOutcome, WipeDecision, WipeFailure,
    WipeOutcome,
};

pub use capability::{CapabilityState, probe, sensor_kind};
pub use enablement::EnablementStore;

pub use platform::{
    NavigationSignal, PasscodeChallenge, PasscodeResponse, PlatformError, PromptChoice,
    PromptRequest, SensorKind, SensorProvider, SensorResponse, UserPrompt,
};

pub use storage::{InMemoryKeyValueStore, KeyValueStore, ProtectedStoreHandle, StorageError};

pub use rates::{FiatUnit, Rate, RateError, RateSource, fiat_unit, get_fiat_rate, supported_tickers};
