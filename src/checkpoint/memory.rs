//! In-memory store.

use super::{GameStore, Snapshot, SnapshotFormat, StoreError};
use crate::model::GameState;
use std::sync::Mutex;

/// Holds the latest encoded snapshot in memory.
///
/// Saves still go through encoding, so a state that cannot be serialized
/// fails here just as it would against a file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<u8>>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `state`, as if it had been saved earlier.
    pub fn with_state(state: &GameState) -> Result<Self, StoreError> {
        let store = Self::new();
        store.save(state)?;
        store.reset_save_count();
        Ok(store)
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }

    fn reset_save_count(&self) {
        if let Ok(mut n) = self.saves.lock() {
            *n = 0;
        }
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        slot.as_deref()
            .map(|bytes| Snapshot::decode(bytes, SnapshotFormat::Json).map(|s| s.state))
            .transpose()
    }

    fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let bytes = Snapshot::new(state.clone()).encode(SnapshotFormat::Json)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = Some(bytes);
        if let Ok(mut n) = self.saves.lock() {
            *n += 1;
        }
        Ok(())
    }
}
