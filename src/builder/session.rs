//! Builder for constructing sessions.

use crate::builder::error::BuildError;
use crate::checkpoint::{load_or_initial, GameStore};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::model::GameState;
use crate::session::Session;

/// Fluent configuration for a [`Session`].
///
/// # Example
///
/// ```rust
/// use thulla::{Action, MemoryStore, SequentialIdGenerator, SessionBuilder};
///
/// let mut session = SessionBuilder::new()
///     .store(MemoryStore::new())
///     .id_generator(SequentialIdGenerator::new("seat"))
///     .build()
///     .unwrap();
///
/// session.dispatch(Action::start_game(["Ana", "Ben"]));
/// assert_eq!(session.state().players[0].id, "seat-1");
/// ```
pub struct SessionBuilder<S: GameStore> {
    store: Option<S>,
    ids: Option<Box<dyn IdGenerator>>,
    initial: Option<GameState>,
}

impl<S: GameStore> SessionBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            store: None,
            ids: None,
            initial: None,
        }
    }

    /// Set the store used for loading and saving (required).
    pub fn store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the player id source. Defaults to random UUIDs.
    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// Start from `state` instead of whatever the store holds.
    pub fn initial(mut self, state: GameState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the session, loading from the store unless an initial state
    /// was given.
    pub fn build(self) -> Result<Session<S>, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let state = match self.initial {
            Some(state) => state,
            None => load_or_initial(&store),
        };
        let ids = self.ids.unwrap_or_else(|| Box::new(UuidIdGenerator));
        Ok(Session::from_parts(state, store, ids))
    }
}

impl<S: GameStore> Default for SessionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
