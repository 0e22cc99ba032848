//! JSON-file document store. The whole document is rewritten on every
//! mutation; handlers lock the store for the full
//! validate-mutate-persist sequence.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::document::Document;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read database file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write database file: {0}")]
    Write(#[source] std::io::Error),

    #[error("database file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Owns the canonical in-memory document and its backing file.
/// Wrapped in a `Mutex` (`SharedStore`) so each request observes a
/// consistent pre-state and commits atomically relative to other requests.
pub struct Store {
    path: PathBuf,
    pub data: Document,
}

pub type SharedStore = Arc<Mutex<Store>>;

impl Store {
    /// Loads the document from `path`, or seeds and persists the fixed
    /// first-run dataset if no file exists yet. A file that exists but does
    /// not parse is a hard error; startup fails rather than silently
    /// resetting user data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(StoreError::Read)?;
            let data = serde_json::from_str(&raw)?;
            info!("Loaded database from {}", path.display());
            return Ok(Store { path, data });
        }

        if let Some(parent) = non_empty_parent(&path) {
            std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }

        let store = Store {
            path,
            data: Document::seed(),
        };
        store.write()?;
        info!("Seeded new database at {}", store.path.display());
        Ok(store)
    }

    /// Serializes the entire in-memory document, replacing the file's prior
    /// contents. Written to a temp file in the same directory and renamed
    /// into place so a crash mid-write never truncates the database.
    pub fn write(&self) -> Result<(), StoreError> {
        let dir = non_empty_parent(&self.path).unwrap_or(Path::new("."));
        let tmp = NamedTempFile::new_in(dir).map_err(StoreError::Write)?;
        serde_json::to_writer_pretty(tmp.as_file(), &self.data)?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Write(e.error))?;
        Ok(())
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }
}

/// `Path::parent` of a bare relative filename is `Some("")`, which is not a
/// usable directory; treat it as absent.
fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.data.assignments.len(), 7);
        assert_eq!(store.data.next_assignment_id, 8);
    }

    #[test]
    fn test_open_loads_existing_file_instead_of_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut store = Store::open(&path).unwrap();
        store.data.assignments.clear();
        store.data.next_assignment_id = 42;
        store.write().unwrap();

        let reopened = Store::open(&path).unwrap();
        assert!(reopened.data.assignments.is_empty());
        assert_eq!(reopened.data.next_assignment_id, 42);
    }

    #[test]
    fn test_open_fails_fast_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Store::open(&path).err().expect("open should fail");
        assert!(matches!(err, StoreError::Corrupt(_)), "unexpected error: {err}");
        // The broken file must be left untouched for the operator.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_write_replaces_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut store = Store::open(&path).unwrap();
        store.data.chat_messages.clear();
        store.write().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: Document = serde_json::from_str(&raw).unwrap();
        assert!(parsed.chat_messages.is_empty());
    }

    #[test]
    fn test_open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/db.json");

        Store::open(&path).unwrap();
        assert!(path.exists());
    }
}
