//! Thulla: a pure functional turn tracker for the Thulla card game
//!
//! The players hold real cards; this crate mirrors what they report. It keeps
//! hand sizes, whose turn it is, which suit was led and which cards are gone,
//! and resolves each round as either a clean trick or a thulla pickup.
//!
//! The design follows a "pure core, imperative shell" split:
//!
//! - **Reducer**: [`reduce`] maps `(GameState, Action)` to a new `GameState`
//!   with no side effects
//! - **Enforcement**: every action is checked up front; illegal actions are
//!   ignored and their violations logged
//! - **Session**: the only component that touches storage, saving after each
//!   change
//!
//! # Example
//!
//! ```rust
//! use thulla::{reduce, Action, Card, GameState, Rank, SequentialIdGenerator, Suit};
//!
//! let ids = SequentialIdGenerator::new("p");
//! let mut state = reduce(&GameState::default(), &Action::start_game(["Alice", "Bob"]), &ids);
//!
//! state = reduce(&state, &Action::play_card("p-1", Card::new(Suit::Spades, Rank::Two)), &ids);
//! state = reduce(&state, &Action::play_card("p-2", Card::new(Suit::Spades, Rank::King)), &ids);
//! assert!(state.current_round.as_ref().unwrap().is_complete);
//!
//! state = reduce(&state, &Action::FinalizeRound, &ids);
//! assert!(state.pending_ace_of_spades_selection);
//! assert_eq!(state.rounds[0].winner_id, "p-2");
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod enforcement;
pub mod ids;
pub mod model;
pub mod reducer;
pub mod rules;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use checkpoint::{FileStore, GameStore, MemoryStore, Snapshot, SnapshotFormat, StoreError};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use model::{Card, CurrentRound, GamePhase, GameState, PlayedCard, Player, Rank, Round, Suit};
pub use reducer::{reduce, Action};
pub use session::Session;
pub use summary::{preview_round, summarize, GameSummary, RoundPreview, Standing};
