//! Actions accepted by the reducer.

use crate::model::{Card, Suit};
use serde::{Deserialize, Serialize};

/// A single user-reported event.
///
/// Serialized as a record tagged by `"type"`, e.g.
/// `{"type":"PLAY_CARD","playerId":"..","card":{"suit":"hearts","rank":"9"}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    StartGame {
        #[serde(rename = "playerNames")]
        player_names: Vec<String>,
    },
    SetMyPlayer {
        #[serde(rename = "playerId")]
        player_id: String,
    },
    SetMyHand {
        cards: Vec<Card>,
    },
    SetLedSuit {
        suit: Suit,
    },
    PlayCard {
        #[serde(rename = "playerId")]
        player_id: String,
        card: Card,
    },
    FinalizeRound,
    SelectAceOfSpadesHolder {
        #[serde(rename = "playerId")]
        player_id: String,
    },
    UndoLastPlay,
    NewGame,
}

impl Action {
    pub fn start_game<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::StartGame {
            player_names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn play_card(player_id: impl Into<String>, card: Card) -> Self {
        Action::PlayCard {
            player_id: player_id.into(),
            card,
        }
    }

    /// Wire name of the action, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartGame { .. } => "START_GAME",
            Action::SetMyPlayer { .. } => "SET_MY_PLAYER",
            Action::SetMyHand { .. } => "SET_MY_HAND",
            Action::SetLedSuit { .. } => "SET_LED_SUIT",
            Action::PlayCard { .. } => "PLAY_CARD",
            Action::FinalizeRound => "FINALIZE_ROUND",
            Action::SelectAceOfSpadesHolder { .. } => "SELECT_ACE_OF_SPADES_HOLDER",
            Action::UndoLastPlay => "UNDO_LAST_PLAY",
            Action::NewGame => "NEW_GAME",
        }
    }
}
