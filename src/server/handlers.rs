// src/server/handlers.rs
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::{NoteCreator, NoteDeleter, NoteLister, NoteUpdater, NoteViewer};
use crate::domain::{Note, NotePatch};
use crate::server::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(NoteLister::new(state.store.clone()).list_notes())
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = NoteCreator::new(state.store.clone())
        .create_note(req.title.as_deref(), req.content.as_deref())?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let note = NoteViewer::new(state.store.clone()).view_note(&id)?;
    Ok(Json(note))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<Note>, ApiError> {
    let note = NoteUpdater::new(state.store.clone()).update_note(&id, &patch)?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    NoteDeleter::new(state.store.clone()).delete_note(&id)?;
    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
