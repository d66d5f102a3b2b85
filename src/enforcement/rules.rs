//! Per-action precondition checks.

use crate::enforcement::violations::ActionViolation;
use crate::model::{Card, GamePhase, GameState};
use crate::reducer::Action;
use crate::rules::{MAX_PLAYERS, MIN_PLAYERS};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking one action against a state.
pub type ActionCheck = Validation<(), NonEmptyVec<ActionViolation>>;

fn require(condition: bool, violation: impl FnOnce() -> ActionViolation) -> ActionCheck {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn known_player(state: &GameState, id: &str) -> ActionCheck {
    require(state.player(id).is_some(), || ActionViolation::UnknownPlayer {
        id: id.to_string(),
    })
}

fn no_duplicates(cards: &[Card]) -> Vec<ActionCheck> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    cards
        .iter()
        .filter(|card| !seen.insert(**card) && reported.insert(**card))
        .map(|&card| Validation::fail(ActionViolation::DuplicateCard { card }))
        .collect()
}

/// Check every precondition of `action` against `state`.
///
/// All violations are collected rather than stopping at the first one.
///
/// # Example
///
/// ```rust
/// use thulla::enforcement::check_action;
/// use thulla::{Action, GameState};
///
/// let state = GameState::default();
/// assert!(check_action(&state, &Action::start_game(["Ana", "Ben"])).is_success());
/// assert!(check_action(&state, &Action::FinalizeRound).is_failure());
/// ```
pub fn check_action(state: &GameState, action: &Action) -> ActionCheck {
    let mut checks: Vec<ActionCheck> = Vec::new();

    match action {
        Action::StartGame { player_names } => {
            checks.push(require(state.phase == GamePhase::Setup, || {
                ActionViolation::WrongPhase {
                    expected: GamePhase::Setup,
                    found: state.phase,
                }
            }));
            let count = player_names.len();
            checks.push(require(
                (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
                || ActionViolation::PlayerCount {
                    count,
                    min: MIN_PLAYERS,
                    max: MAX_PLAYERS,
                },
            ));
        }

        Action::SetMyPlayer { player_id } => {
            checks.push(known_player(state, player_id));
        }

        Action::SetMyHand { cards } => {
            checks.push(require(state.phase == GamePhase::Playing, || {
                ActionViolation::WrongPhase {
                    expected: GamePhase::Playing,
                    found: state.phase,
                }
            }));
            checks.push(require(state.my_player_id.is_some(), || {
                ActionViolation::NoTrackedPlayer
            }));
            checks.extend(no_duplicates(cards));
            let held: u32 = state.players.iter().map(|p| p.card_count).sum();
            checks.push(require(cards.len() <= held as usize, || {
                ActionViolation::HandTooLarge {
                    size: cards.len(),
                    held,
                }
            }));
        }

        Action::SetLedSuit { .. } => {
            checks.push(require(state.current_round.is_some(), || {
                ActionViolation::NoActiveRound
            }));
        }

        Action::PlayCard { player_id, card } => {
            match &state.current_round {
                Some(round) => {
                    checks.push(require(!round.is_complete, || ActionViolation::RoundComplete));
                    checks.push(require(round.led_suit.is_some(), || {
                        ActionViolation::LedSuitPending
                    }));
                }
                None => checks.push(Validation::fail(ActionViolation::NoActiveRound)),
            }
            match state.player(player_id) {
                Some(player) => checks.push(require(player.card_count > 0, || {
                    ActionViolation::PlayerIsSafe {
                        id: player_id.clone(),
                    }
                })),
                None => checks.push(known_player(state, player_id)),
            }
            checks.push(require(!state.is_out_of_play(card), || {
                ActionViolation::CardOutOfPlay { card: *card }
            }));
        }

        Action::FinalizeRound => match &state.current_round {
            Some(round) => {
                checks.push(require(round.led_suit.is_some(), || {
                    ActionViolation::LedSuitPending
                }));
                if round.led_suit.is_some() {
                    checks.push(require(round.has_on_suit_play(), || {
                        ActionViolation::NoOnSuitPlay
                    }));
                }
            }
            None => checks.push(Validation::fail(ActionViolation::NoActiveRound)),
        },

        Action::SelectAceOfSpadesHolder { player_id } => {
            checks.push(require(state.pending_ace_of_spades_selection, || {
                ActionViolation::NotAwaitingAceOfSpades
            }));
            checks.push(known_player(state, player_id));
        }

        Action::UndoLastPlay => match &state.current_round {
            Some(round) => checks.push(require(!round.plays.is_empty(), || {
                ActionViolation::NothingToUndo
            })),
            None => checks.push(Validation::fail(ActionViolation::NoActiveRound)),
        },

        Action::NewGame => {}
    }

    Validation::all_vec(checks).map(|_| ())
}
