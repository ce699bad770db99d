// src/server/mod.rs
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::NoteStore;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore + Send + Sync>,
}

impl AppState {
    pub fn new(store: impl NoteStore + Send + Sync + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the note API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
