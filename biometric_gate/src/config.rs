//! Central configuration for the biometric-gate crate

use std::sync::LazyLock;

/// Key the enablement flag is persisted under.
///
/// Default: "biometrics"
pub static ENABLEMENT_KEY: LazyLock<String> =
    LazyLock::new(|| std::env::var("GATE_ENABLEMENT_KEY").unwrap_or_else(|_| "biometrics".to_string()));

/// Key of the protected secret payload.
///
/// Default: "data"
pub static SECRET_KEY: LazyLock<String> =
    LazyLock::new(|| std::env::var("GATE_SECRET_KEY").unwrap_or_else(|_| "data".to_string()));

/// Key of the encrypted companion blob stored next to the payload.
///
/// Default: "data_encrypted"
pub static SECRET_COMPANION_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GATE_SECRET_COMPANION_KEY").unwrap_or_else(|_| "data_encrypted".to_string())
});

/// Description shown by the sensor while an unlock session is open.
///
/// Default: "Please confirm your identity"
pub static UNLOCK_PROMPT: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GATE_UNLOCK_PROMPT").unwrap_or_else(|_| "Please confirm your identity".to_string())
});
