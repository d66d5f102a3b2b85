//! Load-on-open, save-on-change shell around the reducer.
//!
//! The session is the only part of the crate that performs I/O. It owns the
//! current state, feeds actions through [`reduce`], and after every action
//! that changed something hands the new state to its [`GameStore`].
//! Storage failures are logged and otherwise ignored.

use crate::checkpoint::{load_or_initial, GameStore};
use crate::core::{State, StateHistory, StateTransition};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::model::{GamePhase, GameState};
use crate::reducer::{reduce, Action};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

/// A running tracker bound to a store.
pub struct Session<S: GameStore> {
    state: GameState,
    store: S,
    ids: Box<dyn IdGenerator>,
    history: StateHistory<GamePhase>,
}

impl<S: GameStore> Session<S> {
    /// Open a session on `store`, resuming any saved game.
    pub fn open(store: S) -> Self {
        let state = load_or_initial(&store);
        Self::from_parts(state, store, Box::new(UuidIdGenerator))
    }

    pub(crate) fn from_parts(state: GameState, store: S, ids: Box<dyn IdGenerator>) -> Self {
        debug!(phase = state.phase.name(), round = state.round_number, "Session opened");
        Self {
            state,
            store,
            ids,
            history: StateHistory::new(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Phase changes observed by this session (pure)
    pub fn history(&self) -> &StateHistory<GamePhase> {
        &self.history
    }

    /// Time between the first and last phase change seen by this session.
    pub fn elapsed(&self) -> Option<Duration> {
        self.history.duration()
    }

    /// Apply one action, persisting the result if the state changed.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let next = reduce(&self.state, &action, self.ids.as_ref());
        if next == self.state {
            return &self.state;
        }

        if next.phase != self.state.phase {
            debug!(
                from = self.state.phase.name(),
                to = next.phase.name(),
                "Phase transition"
            );
            self.history = self.history.record(StateTransition {
                from: self.state.phase,
                to: next.phase,
                timestamp: Utc::now(),
                round_number: next.round_number,
            });
        }

        self.state = next;
        if let Err(error) = self.store.save(&self.state) {
            warn!(%error, action = action.name(), "Failed to persist game state");
        }
        &self.state
    }

    /// Consume the session, returning the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::{MemoryStore, StoreError};
    use crate::ids::SequentialIdGenerator;
    use crate::model::{Card, Rank, Suit};

    struct ReadOnlyStore;

    impl GameStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<GameState>, StoreError> {
            Ok(None)
        }

        fn save(&self, _state: &GameState) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".into()))
        }
    }

    fn session() -> Session<MemoryStore> {
        Session::from_parts(
            GameState::default(),
            MemoryStore::new(),
            Box::new(SequentialIdGenerator::new("p")),
        )
    }

    #[test]
    fn every_change_is_saved() {
        let mut session = session();
        session.dispatch(Action::start_game(["Ana", "Ben"]));
        session.dispatch(Action::play_card("p-1", Card::new(Suit::Spades, Rank::Two)));

        assert_eq!(session.store().save_count(), 2);
        assert_eq!(session.store().load().unwrap().as_ref(), Some(session.state()));
    }

    #[test]
    fn ignored_actions_are_not_saved() {
        let mut session = session();
        session.dispatch(Action::UndoLastPlay);
        session.dispatch(Action::FinalizeRound);

        assert_eq!(session.store().save_count(), 0);
        assert_eq!(session.state(), &GameState::default());
    }

    #[test]
    fn phase_changes_are_recorded() {
        let mut session = session();
        session.dispatch(Action::start_game(["Ana", "Ben"]));
        session.dispatch(Action::SetMyPlayer {
            player_id: "p-2".into(),
        });
        session.dispatch(Action::NewGame);

        let path = session.history().get_path();
        assert_eq!(path, vec![&GamePhase::Setup, &GamePhase::Playing, &GamePhase::Setup]);
        assert!(session.elapsed().is_some());
    }

    #[test]
    fn save_failures_do_not_block_play() {
        let mut session = Session::open(ReadOnlyStore);
        session.dispatch(Action::start_game(["Ana", "Ben", "Cy"]));

        assert_eq!(session.state().phase, GamePhase::Playing);
        assert_eq!(session.into_state().players.len(), 3);
    }

    #[test]
    fn open_resumes_saved_game() {
        let mut first = session();
        first.dispatch(Action::start_game(["Ana", "Ben"]));
        let saved = first.state().clone();

        let store = MemoryStore::with_state(&saved).unwrap();
        let resumed = Session::open(store);
        assert_eq!(resumed.state(), &saved);
    }
}
