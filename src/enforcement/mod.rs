//! Precondition enforcement for actions.
//!
//! Every action is checked with stillwater's `Validation`, so a rejected
//! action reports all of its violated preconditions at once instead of just
//! the first. The reducer consults this before applying an action and leaves
//! the state unchanged on failure.
//!
//! # Example
//!
//! ```rust
//! use thulla::enforcement::{check_action, ActionViolation};
//! use thulla::{Action, GameState};
//! use stillwater::validation::Validation;
//!
//! let state = GameState::default();
//! match check_action(&state, &Action::UndoLastPlay) {
//!     Validation::Failure(errors) => {
//!         assert!(errors.iter().any(|e| *e == ActionViolation::NoActiveRound));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_action, ActionCheck};
pub use violations::ActionViolation;
