//! Per-participant bookkeeping.

use super::card::{Card, Suit};
use serde::{Deserialize, Serialize};

/// One participant at the table.
///
/// `card_count` is authoritative. `hand` only holds the cards the tracking
/// user actually knows about: the full hand for the tracked player, cards
/// seen picked up for everyone else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub card_count: u32,
    pub is_safe: bool,
    pub is_loser: bool,
    pub finished_round: Option<u32>,
    #[serde(default)]
    pub hand: Vec<Card>,
    #[serde(default)]
    pub missing_suits: Vec<Suit>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_count,
            is_safe: false,
            is_loser: false,
            finished_round: None,
            hand: Vec::new(),
            missing_suits: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_safe
    }

    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    pub fn is_missing(&self, suit: Suit) -> bool {
        self.missing_suits.contains(&suit)
    }
}
