// src/client/mod.rs
pub mod api;
pub mod session;

pub use api::{ApiClientError, HttpNotesApi, NotesApi};
pub use session::NoteSession;
