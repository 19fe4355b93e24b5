//! CLI command implementations.

pub mod edit;
pub mod export;
pub mod play;
pub mod show;

use anyhow::{Context, Result};
use points_core::{FileStore, ScoreSession};
use tracing::info;

use crate::config::Config;

/// Open the saved game named by `config`.
pub fn open_session(config: &Config) -> Result<ScoreSession<FileStore>> {
    let path = config.state_file();
    let store = FileStore::open(&path)
        .with_context(|| format!("Failed to open saved game file {}", path.display()))?;
    info!("Using saved game file {:?}", store.path());
    Ok(ScoreSession::open(store, config.storage.key.as_str()))
}
