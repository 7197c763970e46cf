/// Whether biometric hardware is present and currently usable.
///
/// Never persisted: the OS can revoke capability between checks without an
/// app restart, so every consumer derives this fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    Capable,
    NotCapable,
}

impl CapabilityState {
    pub fn is_capable(self) -> bool {
        matches!(self, Self::Capable)
    }
}
