//! Read models derived from a game state.

use crate::model::{GameState, Player};
use crate::rules::find_round_winner;
use serde::Serialize;

/// Outcome of the current round, available once it is complete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPreview {
    pub winner_id: String,
    pub winner_name: String,
    pub is_thulla: bool,
    /// Cards the winner will pick up; zero for a clean round.
    pub pickup: u32,
}

/// Projected result of finalizing the current round.
pub fn preview_round(state: &GameState) -> Option<RoundPreview> {
    let round = state.current_round.as_ref().filter(|r| r.is_complete)?;
    let winner_id = find_round_winner(&round.plays, round.led_suit?)?;
    let winner = state.player(winner_id)?;
    Some(RoundPreview {
        winner_id: winner.id.clone(),
        winner_name: winner.name.clone(),
        is_thulla: round.is_thulla,
        pickup: if round.is_thulla {
            round.plays.len() as u32
        } else {
            0
        },
    })
}

/// Where one player ended up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player_id: String,
    pub name: String,
    pub finished_round: Option<u32>,
    pub card_count: u32,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            name: player.name.clone(),
            finished_round: player.finished_round,
            card_count: player.card_count,
        }
    }
}

/// End-of-game overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub rounds_played: usize,
    pub thulla_count: usize,
    /// Safe players, earliest finisher first.
    pub rankings: Vec<Standing>,
    pub loser: Option<Standing>,
}

pub fn summarize(state: &GameState) -> GameSummary {
    let mut safe: Vec<&Player> = state
        .players
        .iter()
        .filter(|p| p.is_safe && !p.is_loser)
        .collect();
    safe.sort_by_key(|p| p.finished_round.unwrap_or(0));

    GameSummary {
        rounds_played: state.rounds.len(),
        thulla_count: state.rounds.iter().filter(|r| r.was_thulla).count(),
        rankings: safe.into_iter().map(Standing::from).collect(),
        loser: state.players.iter().find(|p| p.is_loser).map(Standing::from),
    }
}
