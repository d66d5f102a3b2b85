//! Persistence error types.

use thiserror::Error;

/// Errors raised by [`GameStore`](super::GameStore) implementations.
///
/// The session shell logs and swallows these; they never reach the reducer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a snapshot failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Snapshot was written by a newer version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The store cannot be used right now
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
