// src/util/testing.rs

use std::env;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::client::api::{ApiClientError, NotesApi};
use crate::constants::DEFAULT_TITLE;
use crate::domain::{DomainError, Note, NotePatch};

/// Build a note with a fixed shape for test fixtures.
pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        last_modified: Utc::now(),
    }
}

/// In-memory implementation of `NoteStore` shared by use-case tests.
///
/// Cloning shares the underlying collection, so a test can hand the store to
/// a use case and still inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    notes: std::sync::Arc<Mutex<Vec<Note>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }
}

impl crate::application::NoteStore for MemoryStore {
    fn read_all(&self) -> Vec<Note> {
        self.notes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write_all(&self, notes: &[Note]) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Storage(
                "write failure injected by test".to_string(),
            ));
        }
        *self.notes.lock().unwrap_or_else(|e| e.into_inner()) = notes.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStoreBuilder {
    notes: Vec<Note>,
    fail_writes: bool,
}

impl MemoryStoreBuilder {
    /// Append a note to the stored collection.
    pub fn with_note(mut self, id: &str, title: &str, content: &str) -> Self {
        self.notes.push(note(id, title, content));
        self
    }

    /// Make every `write_all` call fail with a storage error.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MemoryStore {
        MemoryStore {
            notes: std::sync::Arc::new(Mutex::new(self.notes)),
            fail_writes: self.fail_writes,
        }
    }
}

/// Configurable double for the async note API, recording update calls so
/// tests can assert on debounce behavior.
pub struct MockNotesApi {
    notes: Mutex<Vec<Note>>,
    update_calls: Mutex<Vec<(String, NotePatch)>>,
    next_id: AtomicI64,
    fail_fetch: bool,
    fail_creates: bool,
    fail_updates: bool,
    fail_deletes: bool,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::default()
    }

    /// Every `(id, patch)` pair passed to `update_note`, in call order.
    pub fn update_calls(&self) -> Vec<(String, NotePatch)> {
        self.update_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn injected_failure(&self) -> ApiClientError {
        ApiClientError::Api {
            status: 500,
            message: "failure injected by test".to_string(),
        }
    }

    fn not_found(&self) -> ApiClientError {
        ApiClientError::Api {
            status: 404,
            message: "Note not found".to_string(),
        }
    }
}

#[async_trait]
impl NotesApi for MockNotesApi {
    async fn fetch_notes(&self) -> Result<Vec<Note>, ApiClientError> {
        if self.fail_fetch {
            return Err(self.injected_failure());
        }
        Ok(self.notes.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn fetch_note(&self, id: &str) -> Result<Note, ApiClientError> {
        self.notes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| self.not_found())
    }

    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiClientError> {
        if self.fail_creates {
            return Err(self.injected_failure());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Note {
            id: id.to_string(),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            last_modified: Utc::now(),
        };
        self.notes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(0, created.clone());
        Ok(created)
    }

    async fn update_note(&self, id: &str, patch: &NotePatch) -> Result<Note, ApiClientError> {
        self.update_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id.to_string(), patch.clone()));
        if self.fail_updates {
            return Err(self.injected_failure());
        }
        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| self.not_found())?;
        if let Some(title) = &patch.title {
            note.title = title.clone();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        note.last_modified = Utc::now();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &str) -> Result<(), ApiClientError> {
        if self.fail_deletes {
            return Err(self.injected_failure());
        }
        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(self.not_found());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockNotesApiBuilder {
    notes: Vec<Note>,
    fail_fetch: bool,
    fail_creates: bool,
    fail_updates: bool,
    fail_deletes: bool,
}

impl MockNotesApiBuilder {
    pub fn with_note(mut self, id: &str, title: &str, content: &str) -> Self {
        self.notes.push(note(id, title, content));
        self
    }

    pub fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn with_create_failure(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    pub fn with_update_failure(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn with_delete_failure(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn build(self) -> MockNotesApi {
        MockNotesApi {
            notes: Mutex::new(self.notes),
            update_calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1000),
            fail_fetch: self.fail_fetch,
            fail_creates: self.fail_creates,
            fail_updates: self.fail_updates,
            fail_deletes: self.fail_deletes,
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
