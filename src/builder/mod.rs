//! Builder API for configuring a tracker session.

pub mod error;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;
