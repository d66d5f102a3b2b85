//! Saving and restoring games.
//!
//! The rule engine only needs two opaque operations: load a prior state (or
//! start fresh) and save the current one. [`GameStore`] is that contract;
//! [`Snapshot`] is the versioned envelope written to storage.

use crate::model::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk encoding of a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-readable JSON. Also accepts a bare `GameState` object on load.
    #[default]
    Json,
    /// Compact bincode.
    Binary,
}

/// Versioned, timestamped copy of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: GameState,
}

impl Snapshot {
    pub fn new(state: GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }

    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>, StoreError> {
        match format {
            SnapshotFormat::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            SnapshotFormat::Binary => bincode::serialize(self)
                .map_err(|e| StoreError::Serialization(e.to_string())),
        }
    }

    /// Decode stored bytes.
    ///
    /// JSON input that is not a snapshot is read as a bare `GameState`, with
    /// missing fields taking their defaults.
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self, StoreError> {
        let snapshot = match format {
            SnapshotFormat::Json => match serde_json::from_slice::<Snapshot>(bytes) {
                Ok(snapshot) => snapshot,
                Err(_) => {
                    let state: GameState = serde_json::from_slice(bytes)
                        .map_err(|e| StoreError::Deserialization(e.to_string()))?;
                    debug!("Loaded bare game state without snapshot envelope");
                    Snapshot::new(state)
                }
            },
            SnapshotFormat::Binary => bincode::deserialize::<Snapshot>(bytes)
                .map_err(|e| StoreError::Deserialization(e.to_string()))?,
        };

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

/// Where games are kept between runs.
pub trait GameStore: Send + Sync {
    /// Previously saved state, or `None` if nothing was saved.
    fn load(&self) -> Result<Option<GameState>, StoreError>;

    /// Persist the full state, replacing what was there.
    fn save(&self, state: &GameState) -> Result<(), StoreError>;
}

/// Load from `store`, falling back to a fresh game on absence or failure.
pub fn load_or_initial(store: &dyn GameStore) -> GameState {
    match store.load() {
        Ok(Some(state)) => state,
        Ok(None) => GameState::default(),
        Err(error) => {
            warn!(%error, "Failed to load saved game, starting fresh");
            GameState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::model::GamePhase;
    use crate::{reduce, Action};

    fn running_game() -> GameState {
        let ids = SequentialIdGenerator::default();
        reduce(&GameState::default(), &Action::start_game(["Ana", "Ben", "Cy"]), &ids)
    }

    struct BrokenStore;

    impl GameStore for BrokenStore {
        fn load(&self) -> Result<Option<GameState>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".into()))
        }

        fn save(&self, _state: &GameState) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".into()))
        }
    }

    #[test]
    fn json_snapshot_round_trips() {
        let snapshot = Snapshot::new(running_game());
        let bytes = snapshot.encode(SnapshotFormat::Json).unwrap();
        let decoded = Snapshot::decode(&bytes, SnapshotFormat::Json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn binary_snapshot_round_trips() {
        let snapshot = Snapshot::new(running_game());
        let bytes = snapshot.encode(SnapshotFormat::Binary).unwrap();
        let decoded = Snapshot::decode(&bytes, SnapshotFormat::Binary).unwrap();
        assert_eq!(decoded.state, snapshot.state);
    }

    #[test]
    fn bare_state_json_is_accepted() {
        let json = r#"{"phase":"playing","players":[],"roundNumber":4,
            "usedCards":[{"suit":"hearts","rank":"K"}]}"#;
        let snapshot = Snapshot::decode(json.as_bytes(), SnapshotFormat::Json).unwrap();
        assert_eq!(snapshot.state.phase, GamePhase::Playing);
        assert_eq!(snapshot.state.round_number, 4);
        assert_eq!(snapshot.state.used_cards.len(), 1);
        assert!(snapshot.state.current_round.is_none());
    }

    #[test]
    fn newer_snapshot_versions_are_rejected() {
        let mut snapshot = Snapshot::new(GameState::default());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let bytes = snapshot.encode(SnapshotFormat::Binary).unwrap();

        let result = Snapshot::decode(&bytes, SnapshotFormat::Binary);
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let result = Snapshot::decode(b"not json", SnapshotFormat::Json);
        assert!(matches!(result, Err(StoreError::Deserialization(_))));
    }

    #[test]
    fn failing_store_falls_back_to_fresh_game() {
        assert_eq!(load_or_initial(&BrokenStore), GameState::default());
    }
}
