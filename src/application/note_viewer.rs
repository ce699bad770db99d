// src/application/note_viewer.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

pub struct NoteViewer<R: NoteStore> {
    store: R,
}

impl<R: NoteStore> NoteViewer<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn view_note(&self, note_id: &str) -> Result<Note, DomainError> {
        self.store
            .read_all()
            .into_iter()
            .find(|n| n.id == note_id)
            .ok_or_else(|| DomainError::NoteNotFound(note_id.to_string()))
    }
}
