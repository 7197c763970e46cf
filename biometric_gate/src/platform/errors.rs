use thiserror::Error;

/// Unexpected lower-level failure raised by a platform collaborator.
///
/// Expected negative answers ("sensor absent", "passcode denied") are never
/// errors; they travel as ordinary values. This type is reserved for the
/// cases where the platform could not answer at all.
#[derive(Debug, Error, Clone)]
pub enum PlatformError {
    #[error("Sensor fault: {0}")]
    Sensor(String),

    #[error("Passcode fault: {0}")]
    Passcode(String),
}
