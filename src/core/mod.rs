//! Lifecycle phase abstractions.
//!
//! - Phase inspection via the `State` trait
//! - Immutable history of phase changes
//!
//! Everything here is pure; recording a transition returns a new value.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
