use tracing::{info, warn};

use crate::error::Result;
use crate::grid::ScoreGrid;
use crate::model::ScoreModel;
use crate::round::Side;
use crate::storage::KeyValueStore;

/// The running game: owns the grid and the store it is saved to.
///
/// Every successful edit writes the full grid under `key`. Write failures are
/// logged and never returned; the in-memory grid stays authoritative.
pub struct ScoreSession<S: KeyValueStore> {
    grid: ScoreGrid,
    store: S,
    key: String,
}

impl<S: KeyValueStore> ScoreSession<S> {
    /// Restore the saved game under `key`, or start a fresh grid.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let grid = restore_grid(&store, &key);
        Self { grid, store, key }
    }

    pub fn grid(&self) -> &ScoreGrid {
        &self.grid
    }

    pub fn model(&self) -> ScoreModel<'_> {
        self.grid.model()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_point(&mut self, index: usize, side: Side, text: &str) -> Result<()> {
        self.grid.set_point(index, side, text)?;
        self.save();
        Ok(())
    }

    pub fn set_extra(&mut self, index: usize, side: Side, text: &str) -> Result<()> {
        self.grid.set_extra(index, side, text)?;
        self.save();
        Ok(())
    }

    pub fn add_round(&mut self) {
        self.grid.add_round();
        self.save();
    }

    /// Returns `false` when the grid is already at its minimum length.
    pub fn remove_last_round(&mut self) -> bool {
        let removed = self.grid.remove_last_round();
        if removed {
            self.save();
        }
        removed
    }

    /// Zero the grid and mark the saved game as cleared.
    pub fn clear(&mut self) {
        self.grid.clear();
        if let Err(e) = self.store.erase(&self.key) {
            warn!("Failed to erase saved game: {}", e);
        }
        info!("Game cleared ({} rounds)", self.grid.len());
    }

    fn save(&mut self) {
        let result = self
            .grid
            .encode()
            .and_then(|encoded| self.store.put(&self.key, &encoded));
        if let Err(e) = result {
            warn!("Failed to save game state: {}", e);
        }
    }
}

fn restore_grid<S: KeyValueStore>(store: &S, key: &str) -> ScoreGrid {
    match store.get(key) {
        Ok(Some(data)) if !data.trim().is_empty() => match ScoreGrid::from_encoding(&data) {
            Ok(grid) => {
                info!("Restored saved game ({} rounds)", grid.len());
                grid
            }
            Err(e) => {
                warn!("{}, starting a new game", e);
                ScoreGrid::new()
            }
        },
        Ok(_) => ScoreGrid::new(),
        Err(e) => {
            warn!("Failed to read saved game: {}, starting a new game", e);
            ScoreGrid::new()
        }
    }
}
