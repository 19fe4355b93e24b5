use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Key-value store backed by a JSON object file.
///
/// The whole file is loaded on open and atomically replaced on every `put`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or empty file is an empty store.
    ///
    /// A file that is not a JSON object of strings is moved aside to
    /// `<path>.corrupt` and the store opens empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Store {:?} is corrupt: {}, starting empty", path, e);
                    set_aside(&path);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Opened store {:?} ({} keys)", path, entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(&self.entries)?.as_bytes())?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Path a corrupt store file is moved to
pub fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".corrupt");
    PathBuf::from(name)
}

fn set_aside(path: &Path) {
    let target = corrupt_path(path);
    match fs::rename(path, &target) {
        Ok(()) => warn!("Moved corrupt store to {:?}", target),
        Err(e) => warn!("Failed to move corrupt store {:?}: {}", path, e),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(store.get("gameState").unwrap(), None);
    }

    #[test]
    fn test_put_persists_across_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("memory.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put("gameState", "[[7,0,4,0]]").unwrap();
        store.put("other", "kept").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("gameState").unwrap().as_deref(), Some("[[7,0,4,0]]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_erase_writes_empty_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memory.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put("gameState", "[[7,0,4,0]]").unwrap();
        store.erase("gameState").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["gameState"], "");
    }

    #[test]
    fn test_open_torn_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memory.json");
        let torn = "{\"gameState\": \"[[7,0,4,0],[0,0";
        fs::write(&path, torn).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("gameState").unwrap(), None);
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(corrupt_path(&path)).unwrap(), torn);

        store.put("gameState", "[[1,0,10,0]]").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("gameState").unwrap().as_deref(), Some("[[1,0,10,0]]"));
    }

    #[test]
    fn test_open_non_string_values_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memory.json");
        fs::write(&path, "{\"gameState\": [[7,0,4,0]]}").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("gameState").unwrap(), None);
        assert!(corrupt_path(&path).exists());
    }

    #[test]
    fn test_put_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memory.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put("gameState", "[[7,0,4,0]]").unwrap();
        store.put("gameState", "[[8,0,3,0]]").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("memory.json")]);
    }
}
