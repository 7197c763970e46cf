//! Contracts for the platform collaborators the gate is built over.
//!
//! Every trait here is implemented by the host application against the real
//! OS facilities (sensor driver, passcode UI, navigation stack, dialogs).
//! The gate itself never talks to the platform directly.

mod errors;
mod navigation;
mod passcode;
mod prompt;
mod sensor;
mod types;

pub use errors::PlatformError;
pub use navigation::NavigationSignal;
pub use passcode::PasscodeChallenge;
pub use prompt::UserPrompt;
pub use sensor::SensorProvider;
pub use types::{PasscodeResponse, PromptChoice, PromptRequest, SensorKind, SensorResponse};
