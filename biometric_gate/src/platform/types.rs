use std::fmt;

/// Kind of biometric sensor the platform reports as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Face,
    Fingerprint,
    /// Platform reports a biometric sensor without naming its modality.
    Generic,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Face => "Face ID",
            Self::Fingerprint => "Touch ID",
            Self::Generic => "Biometrics",
        };
        write!(f, "{label}")
    }
}

/// The user's single response to one sensor authentication session.
///
/// An explicit cancel is a denial; the session produced no proof of
/// identity either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorResponse {
    Granted,
    Denied,
}

/// Result of the OS-level passcode challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeResponse {
    Granted,
    Denied,
}

/// A titled two-action dialog: one action proceeds, the other backs out.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub confirm_label: &'a str,
    pub cancel_label: &'a str,
}

/// Which of the two prompt actions the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Confirmed,
    Cancelled,
}
