//! Active and completed rounds.

use super::card::{Card, Suit};
use serde::{Deserialize, Serialize};

/// One card played within the active round.
///
/// `is_off_suit` is only set when the play triggers a thulla, so first-round
/// discards of another suit stay `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedCard {
    pub player_id: String,
    pub card: Card,
    pub is_off_suit: bool,
}

/// The round currently being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRound {
    /// `None` until the lead player picks a suit.
    pub led_suit: Option<Suit>,
    pub plays: Vec<PlayedCard>,
    pub lead_player_id: String,
    pub current_turn_player_index: usize,
    pub is_thulla: bool,
    pub is_complete: bool,
}

impl CurrentRound {
    /// Open a fresh round with the lead player to act.
    pub fn open(
        lead_player_id: impl Into<String>,
        lead_index: usize,
        led_suit: Option<Suit>,
    ) -> Self {
        Self {
            led_suit,
            plays: Vec::new(),
            lead_player_id: lead_player_id.into(),
            current_turn_player_index: lead_index,
            is_thulla: false,
            is_complete: false,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.plays.iter().map(|p| &p.card)
    }

    pub fn has_on_suit_play(&self) -> bool {
        self.led_suit
            .is_some_and(|suit| self.plays.iter().any(|p| p.card.suit == suit))
    }
}

/// Immutable record of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub lead_player_id: String,
    pub led_suit: Suit,
    pub plays: Vec<PlayedCard>,
    pub was_thulla: bool,
    pub winner_id: String,
    pub cards_picked_up: u32,
}
