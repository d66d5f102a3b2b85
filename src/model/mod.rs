//! Typed vocabulary of the tracker.
//!
//! Plain data with serde support. Field names serialize in camelCase so
//! persisted games keep a stable, readable shape.

mod card;
mod game;
mod player;
mod round;

pub use card::{Card, Rank, Suit};
pub use game::{GamePhase, GameState};
pub use player::Player;
pub use round::{CurrentRound, PlayedCard, Round};
