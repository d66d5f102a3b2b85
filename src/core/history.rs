//! Phase transition history.
//!
//! Immutable, timestamped log of the lifecycle phases a game has passed
//! through. The session shell appends to it; the rule engine never sees it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use thulla::core::StateTransition;
/// use thulla::GamePhase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: GamePhase::Setup,
///     to: GamePhase::Playing,
///     timestamp: Utc::now(),
///     round_number: 1,
/// };
/// assert_eq!(transition.round_number, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
    /// Round number of the game right after the change
    pub round_number: u32,
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use thulla::core::{StateHistory, StateTransition};
/// use thulla::GamePhase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: GamePhase::Setup,
///         to: GamePhase::Playing,
///         timestamp: Utc::now(),
///         round_number: 1,
///     })
///     .record(StateTransition {
///         from: GamePhase::Playing,
///         to: GamePhase::GameOver,
///         timestamp: Utc::now(),
///         round_number: 9,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GamePhase::Setup, &GamePhase::Playing, &GamePhase::GameOver]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        self.transitions
            .first()
            .map(|first| &first.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
