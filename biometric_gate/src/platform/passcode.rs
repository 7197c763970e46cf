use async_trait::async_trait;

use super::errors::PlatformError;
use super::types::PasscodeResponse;

/// OS-level device passcode challenge, distinct from the biometric sensor.
#[async_trait]
pub trait PasscodeChallenge: Send + Sync {
    /// Whether the device has a passcode configured. `Err` means the
    /// platform could not answer; callers must treat that as "do not
    /// proceed", never as a confirmed `false`.
    async fn is_supported(&self) -> Result<bool, PlatformError>;

    /// Present the passcode prompt and suspend until it resolves.
    async fn authenticate(&self) -> Result<PasscodeResponse, PlatformError>;
}
