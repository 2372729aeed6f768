//! Key-value persistence collaborator.
//!
//! The profile store talks to local device storage through this trait so
//! tests can run against [`MemoryStorage`] while an app ships
//! [`FileStorage`]. Absence of a key is a normal condition (`Ok(None)`),
//! distinct from an IO failure.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// Trait for byte-blob storage keyed by short string names.
pub trait KeyValueStorage {
    /// Read the bytes stored under `key`, `None` if the key was never set
    /// or has been removed.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// File-per-key storage under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &mut impl KeyValueStorage) {
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", b"v1").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some(&b"v1"[..]));

        storage.set("k", b"v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some(&b"v2"[..]));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);

        // Removing an absent key is fine.
        storage.remove("k").unwrap();
    }

    #[test]
    fn memory_storage_contract() {
        exercise(&mut MemoryStorage::new());
    }

    #[test]
    fn file_storage_contract() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&mut FileStorage::new(dir.path()).unwrap());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = FileStorage::new(dir.path()).unwrap();
        first.set("profile", b"{}").unwrap();

        let second = FileStorage::new(dir.path()).unwrap();
        assert_eq!(second.get("profile").unwrap().as_deref(), Some(&b"{}"[..]));
    }
}
