// src/application/note_updater.rs
use chrono::Utc;
use tracing::debug;

use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NotePatch};

pub struct NoteUpdater<R: NoteStore> {
    store: R,
}

impl<R: NoteStore> NoteUpdater<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Apply a partial update to a note.
    ///
    /// Only the fields present in the patch change; `last_modified` is
    /// reassigned. The note keeps its position in the collection (edits do
    /// not re-promote to the front, only creation does).
    pub fn update_note(&self, note_id: &str, patch: &NotePatch) -> Result<Note, DomainError> {
        let mut notes = self.store.read_all();
        let note = notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| DomainError::NoteNotFound(note_id.to_string()))?;

        if let Some(title) = &patch.title {
            note.title = title.clone();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        note.last_modified = Utc::now();
        let updated = note.clone();
        debug!(id = %updated.id, "Updating note");

        self.store.write_all(&notes)?;
        Ok(updated)
    }
}
