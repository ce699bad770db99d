// src/infrastructure/json_store.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Whole-file JSON persistence for the note collection.
///
/// Every call loads or rewrites the entire file. Writes are not atomic and
/// there is no locking; a crash mid-write can corrupt the store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::Storage(format!(
                    "Failed to create data directory {}: {e}",
                    dir.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl NoteStore for JsonFileStore {
    fn read_all(&self) -> Vec<Note> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %e, "Failed to read note store");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Note store is not valid JSON");
                Vec::new()
            }
        }
    }

    fn write_all(&self, notes: &[Note]) -> Result<(), DomainError> {
        self.ensure_parent_dir()?;

        let json = serde_json::to_string_pretty(notes)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize notes: {e}")))?;

        fs::write(&self.path, json).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to write note store {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), count = notes.len(), "Persisted note store");
        Ok(())
    }
}
