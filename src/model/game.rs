//! The aggregate game state and its read-only queries.

use super::card::{Card, Rank, Suit};
use super::player::Player;
use super::round::{CurrentRound, Round};
use crate::core::State;
use crate::rules::count_active_players;
use serde::{Deserialize, Serialize};

state_enum! {
    #[derive(Copy, Eq, Hash, Default)]
    #[serde(rename_all = "camelCase")]
    pub enum GamePhase {
        #[default]
        Setup,
        Playing,
        GameOver,
    }
    final: [GameOver]
}

/// Everything the tracker knows about one game.
///
/// Missing fields fall back to [`GameState::default`] on deserialization, so
/// states written by older versions load cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub current_round: Option<CurrentRound>,
    pub current_lead_player_index: usize,
    /// 1-based once a game is running, 0 before.
    pub round_number: u32,
    pub is_first_round: bool,
    pub pending_ace_of_spades_selection: bool,
    /// Cards retired by clean rounds.
    pub used_cards: Vec<Card>,
    pub my_player_id: Option<String>,
    pub pending_hand_input: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Setup,
            players: Vec::new(),
            rounds: Vec::new(),
            current_round: None,
            current_lead_player_index: 0,
            round_number: 0,
            is_first_round: true,
            pending_ace_of_spades_selection: false,
            used_cards: Vec::new(),
            my_player_id: None,
            pending_hand_input: false,
        }
    }
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.phase.is_final()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// The player the tracking user identified as themselves.
    pub fn my_player(&self) -> Option<&Player> {
        self.my_player_id.as_deref().and_then(|id| self.player(id))
    }

    pub fn active_player_count(&self) -> usize {
        count_active_players(&self.players)
    }

    pub fn current_turn_player(&self) -> Option<&Player> {
        self.current_round
            .as_ref()
            .and_then(|round| self.players.get(round.current_turn_player_index))
    }

    pub fn lead_player(&self) -> Option<&Player> {
        self.current_round
            .as_ref()
            .and_then(|round| self.player(&round.lead_player_id))
    }

    /// Players who may hold the Ace of Spades after the first round.
    pub fn ace_of_spades_candidates(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active()).collect()
    }

    /// Retired cards plus everything already played this round.
    pub fn unavailable_cards(&self) -> Vec<Card> {
        let mut cards = self.used_cards.clone();
        if let Some(round) = &self.current_round {
            cards.extend(round.cards().copied());
        }
        cards
    }

    pub fn is_out_of_play(&self, card: &Card) -> bool {
        self.used_cards.contains(card)
            || self
                .current_round
                .as_ref()
                .is_some_and(|round| round.cards().any(|c| c == card))
    }

    /// Ranks of `suit` that can still legitimately be played.
    pub fn available_ranks(&self, suit: Suit) -> Vec<Rank> {
        Rank::ALL
            .into_iter()
            .filter(|&rank| !self.is_out_of_play(&Card::new(suit, rank)))
            .collect()
    }

    /// Cards held by players, retired, or sitting on the table this round.
    ///
    /// Stays at the deck size for every state reachable from a started game.
    pub fn cards_in_circulation(&self) -> u32 {
        let held: u32 = self.players.iter().map(|p| p.card_count).sum();
        let on_table = self
            .current_round
            .as_ref()
            .map_or(0, |round| round.plays.len() as u32);
        held + self.used_cards.len() as u32 + on_table
    }
}
