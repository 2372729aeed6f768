//! Media storage: persists raw bytes and hands back stable references.
//!
//! Callers (an image picker, typically) import bytes once and from then on
//! only the opaque [`MediaRef`] travels through the rest of the system.
//! Entries hold references, never bytes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Opaque, stable reference to externally stored media bytes.
///
/// The inner value is a path or URL string; nothing in the core ever
/// dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// Wrap an existing path or URL string.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for media byte persistence backends.
pub trait MediaStorage {
    /// Persist `bytes` under a freshly generated name with the given file
    /// extension and return a stable reference to the stored object.
    fn store(&self, bytes: &[u8], extension: &str) -> Result<MediaRef>;
}

/// Filesystem-backed media storage writing into a single root directory.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MediaStorage for LocalMediaStore {
    fn store(&self, bytes: &[u8], extension: &str) -> Result<MediaRef> {
        let extension = extension.trim();
        if extension.is_empty() || extension.starts_with('.') {
            return Err(Error::Validation(format!(
                "Media extension must be non-empty without a leading dot, got {extension:?}"
            )));
        }

        // UUID filename so concurrent imports can never collide.
        let file_name = format!("{}.{extension}", Uuid::now_v7());
        let path = self.root.join(file_name);
        fs::write(&path, bytes)?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored media object");
        Ok(MediaRef::new(path.to_string_lossy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_writes_bytes_and_returns_unique_refs() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path()).unwrap();

        let a = store.store(b"picture-a", "png").unwrap();
        let b = store.store(b"picture-b", "png").unwrap();

        assert_ne!(a, b);
        assert!(a.as_str().ends_with(".png"));
        assert_eq!(fs::read(a.as_str()).unwrap(), b"picture-a");
    }

    #[test]
    fn store_rejects_bad_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.store(b"x", "").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            store.store(b"x", ".png").unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn store_surfaces_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path()).unwrap();
        // Remove the root out from under the store so the write fails.
        fs::remove_dir_all(dir.path()).unwrap();

        assert!(matches!(
            store.store(b"x", "jpg").unwrap_err(),
            Error::Io(_)
        ));
    }
}
