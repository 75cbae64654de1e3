//! JSON File Store
//!
//! Persists all tables as one JSON document, by default at
//! `~/.paddock/store.json`. A transaction holds an exclusive lock on the
//! sibling `.lock` file from load to persist, so separate processes sharing
//! the file are serialized. The document is replaced atomically through a
//! temporary file in the same directory, and only when the transaction
//! changed something.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::ports::{FarmStore, StoreError, StoreTransaction};
use crate::error::{PaddockError, PaddockResult};

use super::snapshot::{StoreSnapshot, SNAPSHOT_VERSION};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Read the committed tables without taking the lock
    pub fn load(&self) -> PaddockResult<StoreSnapshot> {
        if !self.path.exists() {
            return Ok(StoreSnapshot::new());
        }

        let content = fs::read_to_string(&self.path).map_err(unavailable)?;
        let snapshot: StoreSnapshot = serde_json::from_str(&content).map_err(|e| {
            PaddockError::IntegrityViolation(format!(
                "store file {} is corrupted: {}",
                self.path.display(),
                e
            ))
        })?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(PaddockError::IntegrityViolation(format!(
                "store file {} has version {}, this build reads up to {}",
                self.path.display(),
                snapshot.version,
                SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }

    fn save(&self, snapshot: &StoreSnapshot) -> PaddockResult<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(unavailable)?;

        let content = serde_json::to_string_pretty(snapshot).map_err(|e| {
            PaddockError::IntegrityViolation(format!("cannot encode store: {}", e))
        })?;

        let mut temp = NamedTempFile::new_in(parent).map_err(unavailable)?;
        temp.write_all(content.as_bytes()).map_err(unavailable)?;
        temp.persist(&self.path).map_err(|e| unavailable(e.error))?;
        Ok(())
    }

    fn lock(&self) -> PaddockResult<fs::File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }
        let lock_file = fs::File::create(&lock_path).map_err(unavailable)?;
        lock_file.lock_exclusive().map_err(unavailable)?;
        Ok(lock_file)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmStore for JsonFileStore {
    fn transaction<T, F>(&self, work: F) -> PaddockResult<T>
    where
        F: FnOnce(&mut dyn StoreTransaction) -> PaddockResult<T>,
    {
        let lock_file = self.lock()?;

        let result = self.load().and_then(|loaded| {
            let mut snapshot = loaded.clone();
            let value = work(&mut snapshot)?;
            let changed = snapshot != loaded;
            if changed {
                self.save(&snapshot)?;
            }
            Ok((value, changed))
        });

        let _ = lock_file.unlock();
        let (value, changed) = result?;
        if changed {
            debug!(path = %self.path.display(), "store committed");
        } else {
            debug!(path = %self.path.display(), "read-only transaction; store left as is");
        }
        Ok(value)
    }
}

fn unavailable(err: std::io::Error) -> PaddockError {
    PaddockError::Store(StoreError::Unavailable {
        message: err.to_string(),
    })
}

fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".paddock/store.json"))
        .unwrap_or_else(|| PathBuf::from(".paddock/store.json"))
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
