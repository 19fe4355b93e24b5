use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Round {index} is out of range (grid has {len} rounds)")]
    RoundOutOfRange { index: usize, len: usize },

    #[error("Failed to decode saved game: {0}")]
    Decode(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
