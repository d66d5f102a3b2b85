//! Phase trait for the game lifecycle.
//!
//! A game moves through a small set of coarse phases. This trait gives
//! those phases a uniform, side-effect free way to describe themselves so
//! the session shell can log and record them without knowing the concrete
//! enum.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle phases.
///
/// All methods are pure. Implementations are plain values that can be
/// cloned into a [`StateHistory`](super::StateHistory) and persisted.
///
/// # Example
///
/// ```rust
/// use thulla::core::State;
/// use thulla::GamePhase;
///
/// assert_eq!(GamePhase::Playing.name(), "Playing");
/// assert!(GamePhase::GameOver.is_final());
/// assert!(!GamePhase::Setup.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the phase for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GamePhase;

    #[test]
    fn phase_names_match_variants() {
        assert_eq!(GamePhase::Setup.name(), "Setup");
        assert_eq!(GamePhase::Playing.name(), "Playing");
        assert_eq!(GamePhase::GameOver.name(), "GameOver");
    }

    #[test]
    fn only_game_over_is_final() {
        assert!(!GamePhase::Setup.is_final());
        assert!(!GamePhase::Playing.is_final());
        assert!(GamePhase::GameOver.is_final());
    }

    #[test]
    fn phase_serializes_in_camel_case() {
        let json = serde_json::to_string(&GamePhase::GameOver).unwrap();
        assert_eq!(json, "\"gameOver\"");

        let parsed: GamePhase = serde_json::from_str("\"playing\"").unwrap();
        assert_eq!(parsed, GamePhase::Playing);
    }

    #[test]
    fn default_phase_is_setup() {
        assert_eq!(GamePhase::default(), GamePhase::Setup);
    }
}
