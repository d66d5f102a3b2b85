//! The round-resolution state machine.
//!
//! [`reduce`] maps `(state, action)` to the next state. It performs no I/O
//! and never mutates its input; the only capability it takes is an
//! [`IdGenerator`] used when a game starts. Actions that fail
//! [`check_action`] are ignored: the returned state equals the input.
//!
//! # Example
//!
//! ```rust
//! use thulla::{reduce, Action, GameState, SequentialIdGenerator};
//!
//! let ids = SequentialIdGenerator::default();
//! let state = reduce(&GameState::default(), &Action::start_game(["Alice", "Bob", "Carol"]), &ids);
//!
//! let counts: Vec<u32> = state.players.iter().map(|p| p.card_count).collect();
//! assert_eq!(counts, vec![18, 17, 17]);
//! assert!(state.is_first_round);
//! ```

mod action;
mod transitions;

pub use action::Action;

use crate::enforcement::check_action;
use crate::ids::IdGenerator;
use crate::model::GameState;
use stillwater::validation::Validation;
use tracing::debug;

/// Apply one action and return the resulting state.
pub fn reduce<I: IdGenerator + ?Sized>(state: &GameState, action: &Action, ids: &I) -> GameState {
    if let Validation::Failure(violations) = check_action(state, action) {
        for violation in violations.iter() {
            debug!(action = action.name(), %violation, "Action ignored");
        }
        return state.clone();
    }

    match action {
        Action::StartGame { player_names } => transitions::start_game(state, player_names, ids),
        Action::SetMyPlayer { player_id } => transitions::set_my_player(state, player_id),
        Action::SetMyHand { cards } => transitions::set_my_hand(state, cards),
        Action::SetLedSuit { suit } => transitions::set_led_suit(state, *suit),
        Action::PlayCard { player_id, card } => transitions::play_card(state, player_id, *card),
        Action::FinalizeRound => transitions::finalize_round(state),
        Action::SelectAceOfSpadesHolder { player_id } => {
            transitions::select_ace_of_spades_holder(state, player_id)
        }
        Action::UndoLastPlay => transitions::undo_last_play(state),
        Action::NewGame => GameState::default(),
    }
}
