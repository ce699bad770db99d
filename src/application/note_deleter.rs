// src/application/note_deleter.rs
use tracing::debug;

use crate::application::NoteStore;
use crate::domain::DomainError;

pub struct NoteDeleter<R: NoteStore> {
    store: R,
}

impl<R: NoteStore> NoteDeleter<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Remove a note from the collection and persist the result.
    pub fn delete_note(&self, note_id: &str) -> Result<(), DomainError> {
        let mut notes = self.store.read_all();
        let before = notes.len();
        notes.retain(|n| n.id != note_id);
        if notes.len() == before {
            return Err(DomainError::NoteNotFound(note_id.to_string()));
        }
        debug!(id = %note_id, "Deleting note");
        self.store.write_all(&notes)
    }
}
