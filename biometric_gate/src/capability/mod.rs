//! Fresh, uncached checks of whether biometric hardware is usable right now.

mod probe;
mod types;

pub use probe::{probe, sensor_kind};
pub use types::CapabilityState;
