//! Reasons an action can be rejected.

use crate::model::{Card, GamePhase};
use thiserror::Error;

/// A violated precondition. Rejected actions leave the state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionViolation {
    #[error("Action requires phase {expected:?} (current: {found:?})")]
    WrongPhase {
        expected: GamePhase,
        found: GamePhase,
    },

    #[error("A game needs between {min} and {max} players (got {count})")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("Unknown player '{id}'")]
    UnknownPlayer { id: String },

    #[error("No tracked player has been chosen")]
    NoTrackedPlayer,

    #[error("Card {card} listed more than once")]
    DuplicateCard { card: Card },

    #[error("Reported hand of {size} cards exceeds the {held} cards held at the table")]
    HandTooLarge { size: usize, held: u32 },

    #[error("No round is in progress")]
    NoActiveRound,

    #[error("The current round is already complete")]
    RoundComplete,

    #[error("The led suit has not been chosen")]
    LedSuitPending,

    #[error("Player '{id}' is safe and holds no cards")]
    PlayerIsSafe { id: String },

    #[error("Card {card} is already out of play")]
    CardOutOfPlay { card: Card },

    #[error("Nobody has followed the led suit yet")]
    NoOnSuitPlay,

    #[error("Not waiting for the Ace of Spades holder")]
    NotAwaitingAceOfSpades,

    #[error("No play to undo")]
    NothingToUndo,
}
