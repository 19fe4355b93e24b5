//! Saved-game persistence.
//!
//! - `KeyValueStore` - the string key-value seam the session writes through
//! - `MemoryStore`, `FileStore` - in-process and on-disk stores
//! - `encode_rounds`, `decode_rounds` - the JSON array-of-arrays grid codec

mod codec;
mod file;
mod memory;

pub use codec::*;
pub use file::{FileStore, corrupt_path};
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value storage for the saved game.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Mark `key` as cleared by storing the empty value. The key stays present.
    fn erase(&mut self, key: &str) -> Result<()> {
        self.put(key, "")
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        (**self).erase(key)
    }
}
