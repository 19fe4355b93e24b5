//! Fixed game and storage parameters.
//!
//! - Grid sizing (`grid`)
//! - Scoring rule constants (`score`)
//! - Persistence defaults (`storage`)

/// Grid sizing.
pub mod grid {
    /// Number of rounds in a fresh grid.
    pub const DEFAULT_ROUNDS: usize = 8;

    /// Rounds can never be removed below this count.
    pub const MIN_ROUNDS: usize = 6;
}

/// Scoring rules.
pub mod score {
    /// Points per round; a team's points and its opponent's always sum to this.
    pub const ROUND_TARGET: u32 = 11;
}

/// Persistence defaults.
pub mod storage {
    /// Key the grid encoding is saved under.
    pub const DEFAULT_KEY: &str = "gameState";

    /// File name of the key-value store holding the saved game.
    pub const DEFAULT_FILE_NAME: &str = "game_memory.json";
}
