// src/application/note_creator.rs
use chrono::Utc;
use tracing::debug;

use crate::application::NoteStore;
use crate::constants::DEFAULT_TITLE;
use crate::domain::{DomainError, Note};

pub struct NoteCreator<R: NoteStore> {
    store: R,
}

impl<R: NoteStore> NoteCreator<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Create a note and insert it at the front of the collection.
    ///
    /// Rejects the request when both title and content are absent or empty.
    /// A missing title defaults to "Untitled Note", missing content to "".
    pub fn create_note(
        &self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Note, DomainError> {
        let title = title.unwrap_or("");
        let content = content.unwrap_or("");
        if title.is_empty() && content.is_empty() {
            return Err(DomainError::EmptyNote);
        }

        let now = Utc::now();
        let mut notes = self.store.read_all();

        let note = Note {
            id: unique_id(&notes, now.timestamp_millis()),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            last_modified: now,
        };
        debug!(id = %note.id, title = %note.title, "Creating note");

        notes.insert(0, note.clone());
        self.store.write_all(&notes)?;
        Ok(note)
    }
}

/// Derive an id from the creation-time millisecond clock, bumping past any
/// id already taken (two creates can land in the same millisecond).
fn unique_id(notes: &[Note], mut millis: i64) -> String {
    loop {
        let candidate = millis.to_string();
        if !notes.iter().any(|n| n.id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MemoryStore;

    #[test]
    fn given_title_and_content_when_creating_then_persists_at_front() {
        // Arrange
        let store = MemoryStore::builder()
            .with_note("1", "Existing", "old")
            .build();
        let creator = NoteCreator::new(store.clone());

        // Act
        let note = creator
            .create_note(Some("Groceries"), Some("milk"))
            .expect("Create should succeed");

        // Assert
        let notes = store.read_all();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, note.id);
        assert_eq!(notes[1].id, "1");
    }

    #[test]
    fn given_no_title_when_creating_then_defaults_to_untitled() {
        let creator = NoteCreator::new(MemoryStore::builder().build());

        let note = creator
            .create_note(None, Some("just content"))
            .expect("Create should succeed");

        assert_eq!(note.title, "Untitled Note");
        assert_eq!(note.content, "just content");
    }

    #[test]
    fn given_only_title_when_creating_then_content_is_empty() {
        let creator = NoteCreator::new(MemoryStore::builder().build());

        let note = creator
            .create_note(Some("Ideas"), None)
            .expect("Create should succeed");

        assert_eq!(note.title, "Ideas");
        assert_eq!(note.content, "");
    }

    #[test]
    fn given_empty_title_and_content_when_creating_then_returns_error() {
        let creator = NoteCreator::new(MemoryStore::builder().build());

        let result = creator.create_note(Some(""), Some(""));

        assert!(matches!(result, Err(DomainError::EmptyNote)));
    }

    #[test]
    fn given_colliding_millisecond_ids_when_creating_then_bumps_id() {
        let notes = vec![];
        let taken = unique_id(&notes, 1700000000000);
        assert_eq!(taken, "1700000000000");

        let store = MemoryStore::builder()
            .with_note("1700000000000", "Taken", "x")
            .build();
        let bumped = unique_id(&store.read_all(), 1700000000000);
        assert_eq!(bumped, "1700000000001");
    }
}
