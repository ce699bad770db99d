// src/application/note_lister.rs
use crate::application::NoteStore;
use crate::domain::Note;

pub struct NoteLister<R: NoteStore> {
    store: R,
}

impl<R: NoteStore> NoteLister<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// List all notes in stored order (newest-created first).
    pub fn list_notes(&self) -> Vec<Note> {
        self.store.read_all()
    }
}
