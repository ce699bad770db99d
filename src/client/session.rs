// src/client/session.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::api::{ApiClientError, NotesApi};
use crate::constants::DEBOUNCE_WINDOW_MS;
use crate::domain::{Note, NotePatch};

#[derive(Default)]
struct SessionState {
    notes: Vec<Note>,
    selected_id: Option<String>,
    saving: bool,
    last_error: Option<String>,
}

/// A scheduled save. `fired` flips once the quiet window has elapsed and the
/// network call is underway; a save that has fired is never aborted, only a
/// still-waiting timer is.
struct PendingSave {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

/// In-memory mirror of the server's note list.
///
/// Edits apply locally first (optimistic) and are persisted after a quiet
/// window; each new edit cancels and restarts the window so a burst of
/// keystrokes produces a single update request carrying the final text.
/// Failures surface as a user-facing message and never roll local state back.
pub struct NoteSession {
    api: Arc<dyn NotesApi>,
    state: Arc<Mutex<SessionState>>,
    pending_save: Option<PendingSave>,
    debounce: Duration,
}

impl NoteSession {
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        Self::with_debounce(api, Duration::from_millis(DEBOUNCE_WINDOW_MS))
    }

    pub fn with_debounce(api: Arc<dyn NotesApi>, debounce: Duration) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SessionState::default())),
            pending_save: None,
            debounce,
        }
    }

    /// Fetch the full list. Selects the first note when nothing is selected
    /// yet. On failure the list stays empty and an error message is recorded.
    pub async fn load(&mut self) -> Result<(), ApiClientError> {
        match self.api.fetch_notes().await {
            Ok(notes) => {
                let mut state = self.lock();
                state.notes = notes;
                if state.selected_id.is_none() {
                    state.selected_id = state.notes.first().map(|n| n.id.clone());
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load notes");
                self.lock().last_error = Some("Failed to load notes".to_string());
                Err(e)
            }
        }
    }

    /// Create a note on the server, prepend it locally and select it.
    pub async fn create(&mut self, title: &str, content: &str) -> Result<Note, ApiClientError> {
        match self.api.create_note(title, content).await {
            Ok(note) => {
                let mut state = self.lock();
                state.notes.insert(0, note.clone());
                state.selected_id = Some(note.id.clone());
                Ok(note)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create note");
                self.lock().last_error = Some("Failed to create note".to_string());
                Err(e)
            }
        }
    }

    /// Apply an edit locally and schedule a debounced save.
    ///
    /// The save reads the note's text at fire time, so a burst of edits to
    /// the same note persists only the final state.
    pub fn edit(&mut self, id: &str, patch: NotePatch) {
        {
            let mut state = self.lock();
            let Some(note) = state.notes.iter_mut().find(|n| n.id == id) else {
                warn!(id = %id, "Edit targets a note not in the session");
                return;
            };
            if let Some(title) = patch.title {
                note.title = title;
            }
            if let Some(content) = patch.content {
                note.content = content;
            }
            note.last_modified = Utc::now();
        }
        self.schedule_save(id);
    }

    /// Delete a note on the server, then locally. When the deleted note was
    /// selected, selection moves to the new first note (or clears).
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiClientError> {
        match self.api.delete_note(id).await {
            Ok(()) => {
                let mut state = self.lock();
                state.notes.retain(|n| n.id != id);
                if state.selected_id.as_deref() == Some(id) {
                    state.selected_id = state.notes.first().map(|n| n.id.clone());
                }
                Ok(())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to delete note");
                self.lock().last_error = Some("Failed to delete note".to_string());
                Err(e)
            }
        }
    }

    pub fn select(&mut self, id: &str) {
        let mut state = self.lock();
        if state.notes.iter().any(|n| n.id == id) {
            state.selected_id = Some(id.to_string());
        }
    }

    pub fn notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.lock().selected_id.clone()
    }

    pub fn selected_note(&self) -> Option<Note> {
        let state = self.lock();
        let id = state.selected_id.clone()?;
        state.notes.iter().find(|n| n.id == id).cloned()
    }

    /// True while a debounced save request is in flight.
    pub fn is_saving(&self) -> bool {
        self.lock().saving
    }

    /// Take the most recent user-facing error message, if any.
    pub fn take_error(&self) -> Option<String> {
        self.lock().last_error.take()
    }

    /// Await the outstanding save, if any. Used on shutdown and in tests.
    pub async fn flush_pending_save(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            let _ = pending.handle.await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn schedule_save(&mut self, id: &str) {
        // A timer still waiting is superseded; a save already on the wire
        // is left to finish.
        if let Some(pending) = self.pending_save.take() {
            if !pending.fired.load(Ordering::Acquire) {
                pending.handle.abort();
            }
        }

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let fired = Arc::new(AtomicBool::new(false));
        let fired_flag = Arc::clone(&fired);
        let id = id.to_string();
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            fired_flag.store(true, Ordering::Release);

            let payload = {
                let mut s = state.lock().unwrap_or_else(|e| e.into_inner());
                let Some(note) = s.notes.iter().find(|n| n.id == id) else {
                    // Deleted before the window elapsed; nothing to save.
                    return;
                };
                let patch = NotePatch {
                    title: Some(note.title.clone()),
                    content: Some(note.content.clone()),
                };
                s.saving = true;
                patch
            };

            debug!(id = %id, "Persisting debounced edit");
            match api.update_note(&id, &payload).await {
                Ok(saved) => {
                    let mut s = state.lock().unwrap_or_else(|e| e.into_inner());
                    if let Some(note) = s.notes.iter_mut().find(|n| n.id == id) {
                        note.last_modified = saved.last_modified;
                    }
                    s.saving = false;
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "Failed to save note");
                    let mut s = state.lock().unwrap_or_else(|e| e.into_inner());
                    s.last_error = Some("Failed to save note".to_string());
                    s.saving = false;
                }
            }
        });

        self.pending_save = Some(PendingSave { handle, fired });
    }
}

impl Drop for NoteSession {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            if !pending.fired.load(Ordering::Acquire) {
                pending.handle.abort();
            }
        }
    }
}
