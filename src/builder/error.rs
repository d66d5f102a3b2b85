//! Build errors for session construction.

use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Store not specified. Call .store(store) before .build()")]
    MissingStore,
}
