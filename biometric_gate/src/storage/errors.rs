use thiserror::Error;

/// Failure of a single persisted-store operation.
///
/// Reads failing is survivable everywhere in this crate (the flag decodes
/// to disabled); writes and deletes failing must reach the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Storage delete failed: {0}")]
    Delete(String),
}
