// src/client/api.rs
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Note, NotePatch};

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Async port over the note API, so the session can be driven by either the
/// real HTTP client or an in-memory double in tests.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn fetch_notes(&self) -> Result<Vec<Note>, ApiClientError>;
    async fn fetch_note(&self, id: &str) -> Result<Note, ApiClientError>;
    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiClientError>;
    async fn update_note(&self, id: &str, patch: &NotePatch) -> Result<Note, ApiClientError>;
    async fn delete_note(&self, id: &str) -> Result<(), ApiClientError>;
}

/// reqwest-backed client for the note server.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/api/notes/{id}", self.base_url)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-success response into an error carrying the server's message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|b| b.error)
        .unwrap_or_else(|_| "request failed".to_string());
    Err(ApiClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn fetch_notes(&self) -> Result<Vec<Note>, ApiClientError> {
        let response = self.client.get(self.notes_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn fetch_note(&self, id: &str) -> Result<Note, ApiClientError> {
        let response = self.client.get(self.note_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiClientError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&serde_json::json!({ "title": title, "content": content }))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update_note(&self, id: &str, patch: &NotePatch) -> Result<Note, ApiClientError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(patch)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_note(&self, id: &str) -> Result<(), ApiClientError> {
        let response = self.client.delete(self.note_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}
