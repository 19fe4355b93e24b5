//! # points-core
//!
//! Score model for a two-team points counter.
//!
//! This crate provides:
//! - `Round` and `Side` - one row of the score sheet and the team it belongs to
//! - `ScoreGrid` - the ordered, resizable list of rounds and all its mutators
//! - `ScoreModel` - read-only running totals over a grid
//! - `KeyValueStore` implementations and the JSON grid codec
//! - `ScoreSession` - the session-scoped owner that saves after every edit

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod round;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
pub use export::{ExportFormat, export_to_dir, format_json, format_tsv};
pub use grid::ScoreGrid;
pub use model::{ScoreModel, Totals};
pub use round::{EntryError, Round, Side};
pub use session::ScoreSession;
pub use storage::{FileStore, KeyValueStore, MemoryStore, decode_rounds, encode_rounds};
