// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Title or content is required")]
    EmptyNote,
    #[error("Storage error: {0}")]
    Storage(String),
}
