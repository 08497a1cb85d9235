//! JSON Snapshot Repository
//!
//! Persists every collection in one versioned JSON file
//! (default `.sweep/snapshot.json`). Writes take an exclusive lock on a
//! sibling `.lock` file and replace the snapshot atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::records;
use crate::domain::entities::EntityStore;
use crate::domain::ports::{EntityRepository, Record, RepositoryError, RepositoryResult};
use crate::domain::value_objects::EntityKind;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotFile {
    #[serde(flatten)]
    store: EntityStore,
}

#[derive(Serialize)]
struct SnapshotFileRef<'a> {
    version: u32,
    #[serde(flatten)]
    store: &'a EntityStore,
}

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the whole snapshot with `store`
    pub fn save(&self, store: &EntityStore) -> RepositoryResult<()> {
        self.with_lock(|| self.save_to_disk(store))
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> RepositoryResult<EntityStore> {
        if !self.path.exists() {
            return Ok(EntityStore::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access)?;

        let header: VersionHeader =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        if header.version != SNAPSHOT_VERSION {
            return Err(RepositoryError::VersionMismatch {
                found: header.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let file: SnapshotFile =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(file.store)
    }

    fn save_to_disk(&self, store: &EntityStore) -> RepositoryResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(access)?;

        let content = serde_json::to_string_pretty(&SnapshotFileRef {
            version: SNAPSHOT_VERSION,
            store,
        })
        .map_err(|e| RepositoryError::Serialization {
            message: e.to_string(),
        })?;

        let mut tmp = NamedTempFile::new_in(&parent).map_err(access)?;
        tmp.write_all(content.as_bytes()).map_err(access)?;
        tmp.write_all(b"\n").map_err(access)?;
        tmp.persist(&self.path).map_err(|e| access(e.error))?;
        Ok(())
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> RepositoryResult<T>) -> RepositoryResult<T> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(access)?;
            }
        }

        let lock_file = fs::File::create(&lock_path).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    /// Load, edit and save under one lock
    fn edit(
        &self,
        f: impl FnOnce(&mut EntityStore) -> RepositoryResult<()>,
    ) -> RepositoryResult<()> {
        self.with_lock(|| {
            let mut store = self.load_from_disk()?;
            f(&mut store)?;
            self.save_to_disk(&store)
        })
    }
}

impl EntityRepository for JsonSnapshotRepository {
    fn fetch_all(&self) -> RepositoryResult<EntityStore> {
        self.load_from_disk()
    }

    fn create(&self, record: &Record) -> RepositoryResult<()> {
        self.edit(|store| records::create(store, record))
    }

    fn update(&self, record: &Record) -> RepositoryResult<()> {
        self.edit(|store| records::update(store, record))
    }

    fn delete(&self, kind: EntityKind, id: &str) -> RepositoryResult<()> {
        self.edit(|store| records::delete(store, kind, id))
    }
}

fn access(e: std::io::Error) -> RepositoryError {
    RepositoryError::Access {
        message: e.to_string(),
    }
}
