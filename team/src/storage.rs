//! Durable storage for the team collection
//!
//! The store writes the whole collection through on every change and reads
//! it once at startup. Backends only need key/value semantics.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::team::Team;

/// A key/value backend a [`TeamStore`](crate::TeamStore) persists into
pub trait TeamStorage {
    /// Load the collection stored under `key`, or `None` if nothing is stored
    fn load(&self, key: &str) -> Result<Option<Vec<Team>>, StorageError>;

    /// Replace the collection stored under `key`
    fn save(&mut self, key: &str, teams: &[Team]) -> Result<(), StorageError>;
}

/// In-memory storage holding serialized snapshots
///
/// Snapshots are kept as JSON so the same encode/decode path runs as with
/// [`FileStorage`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store raw JSON under `key`, bypassing serialization
    pub fn insert_raw(&mut self, key: impl Into<String>, json: impl Into<String>) {
        self.entries.insert(key.into(), json.into());
    }
}

impl TeamStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<Team>>, StorageError> {
        match self.entries.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, teams: &[Team]) -> Result<(), StorageError> {
        let json = serde_json::to_string(teams)?;
        self.entries.insert(key.to_string(), json);
        Ok(())
    }
}

/// Storage writing one `<key>.json` file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Store files under `root`, creating it on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store files under `~/.pokeplan`, if a home directory is known
    pub fn in_home_dir() -> Option<Self> {
        let mut path = dirs::home_dir()?;
        path.push(".pokeplan");
        Some(Self::new(path))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    ///
    /// Bytes outside `[A-Za-z0-9.-]` are escaped as `_XX` hex, so distinct
    /// keys always map to distinct files.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for b in key.bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'-' => file_name.push(b as char),
                _ => file_name.push_str(&format!("_{b:02X}")),
            }
        }
        self.root.join(format!("{file_name}.json"))
    }
}

impl TeamStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<Team>>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&mut self, key: &str, teams: &[Team]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(teams)?)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
