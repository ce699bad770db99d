// src/application/store.rs
use std::sync::Arc;

use crate::domain::{DomainError, Note};

/// Port over the persisted note collection.
///
/// The whole collection is read and written wholesale; there is no keyed
/// access and no locking. Concurrent writers race (last write wins), which
/// is acceptable for a single-user store.
pub trait NoteStore {
    /// Load every note in stored order. Read failures (missing file,
    /// unparseable contents) yield an empty collection, never an error.
    fn read_all(&self) -> Vec<Note>;

    /// Replace the stored collection with `notes`.
    fn write_all(&self, notes: &[Note]) -> Result<(), DomainError>;
}

impl<S: NoteStore + ?Sized> NoteStore for Arc<S> {
    fn read_all(&self) -> Vec<Note> {
        (**self).read_all()
    }

    fn write_all(&self, notes: &[Note]) -> Result<(), DomainError> {
        (**self).write_all(notes)
    }
}
