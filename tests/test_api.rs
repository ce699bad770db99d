mod helpers;

use anyhow::Result;
use helpers::{spawn_app, TestServer};
use notekeep::application::NoteStore;
use notekeep::domain::Note;
use notekeep::server::AppState;
use notekeep::util::testing::MemoryStore;
use serde_json::json;

async fn create(base_url: &str, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}/api/notes"))
        .json(&body)
        .send()
        .await
        .expect("request failed")
}

async fn list(base_url: &str) -> Vec<Note> {
    reqwest::get(format!("{base_url}/api/notes"))
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid list body")
}

#[tokio::test]
async fn given_running_server_when_checking_health_then_returns_ok() -> Result<()> {
    let server = TestServer::spawn().await?;

    let body: serde_json::Value = reqwest::get(format!("{}/health", server.base_url))
        .await?
        .json()
        .await?;

    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn given_empty_payload_when_creating_then_returns_400() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = create(&server.base_url, json!({ "title": "", "content": "" })).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Title or content is required");
    Ok(())
}

#[tokio::test]
async fn given_only_title_when_creating_then_content_defaults_to_empty() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = create(&server.base_url, json!({ "title": "Groceries" })).await;

    assert_eq!(response.status(), 201);
    let note: Note = response.json().await?;
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "");
    Ok(())
}

#[tokio::test]
async fn given_only_content_when_creating_then_title_defaults_to_untitled() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = create(&server.base_url, json!({ "content": "some text" })).await;

    assert_eq!(response.status(), 201);
    let note: Note = response.json().await?;
    assert_eq!(note.title, "Untitled Note");
    assert_eq!(note.content, "some text");
    Ok(())
}

#[tokio::test]
async fn given_existing_notes_when_creating_then_new_note_lists_first() -> Result<()> {
    let server = TestServer::spawn().await?;
    create(&server.base_url, json!({ "title": "First" })).await;

    let second: Note = create(&server.base_url, json!({ "title": "Second" }))
        .await
        .json()
        .await?;

    let notes = list(&server.base_url).await;
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[1].title, "First");
    Ok(())
}

#[tokio::test]
async fn given_existing_note_when_getting_by_id_then_returns_it() -> Result<()> {
    let server = TestServer::spawn().await?;
    let created: Note = create(&server.base_url, json!({ "title": "Lookup" }))
        .await
        .json()
        .await?;

    let fetched: Note = reqwest::get(format!("{}/api/notes/{}", server.base_url, created.id))
        .await?
        .json()
        .await?;

    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_returns_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = reqwest::get(format!("{}/api/notes/nope", server.base_url)).await?;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Note not found");
    Ok(())
}

#[tokio::test]
async fn given_title_update_when_applied_then_content_and_position_survive() -> Result<()> {
    let server = TestServer::spawn().await?;
    let older: Note = create(&server.base_url, json!({ "title": "Older", "content": "keep me" }))
        .await
        .json()
        .await?;
    create(&server.base_url, json!({ "title": "Newer" })).await;

    let response = reqwest::Client::new()
        .put(format!("{}/api/notes/{}", server.base_url, older.id))
        .json(&json!({ "title": "Older, renamed" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let updated: Note = response.json().await?;
    assert_eq!(updated.title, "Older, renamed");
    assert_eq!(updated.content, "keep me");
    assert!(updated.last_modified > older.last_modified);

    // Editing must not promote the note back to the front.
    let notes = list(&server.base_url).await;
    assert_eq!(notes[0].title, "Newer");
    assert_eq!(notes[1].id, older.id);
    Ok(())
}

#[tokio::test]
async fn given_content_update_when_applied_then_title_survives() -> Result<()> {
    let server = TestServer::spawn().await?;
    let note: Note = create(&server.base_url, json!({ "title": "Stable", "content": "v1" }))
        .await
        .json()
        .await?;

    let updated: Note = reqwest::Client::new()
        .put(format!("{}/api/notes/{}", server.base_url, note.id))
        .json(&json!({ "content": "v2" }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(updated.title, "Stable");
    assert_eq!(updated.content, "v2");
    Ok(())
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_returns_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = reqwest::Client::new()
        .put(format!("{}/api/notes/ghost", server.base_url))
        .json(&json!({ "title": "x" }))
        .send()
        .await?;

    assert_eq!(response.status(), 404);
    Ok(())
}

#[tokio::test]
async fn given_existing_note_when_deleting_then_removes_it() -> Result<()> {
    let server = TestServer::spawn().await?;
    let note: Note = create(&server.base_url, json!({ "title": "Doomed" }))
        .await
        .json()
        .await?;

    let response = reqwest::Client::new()
        .delete(format!("{}/api/notes/{}", server.base_url, note.id))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["message"], "Note deleted successfully");
    assert!(list(&server.base_url).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_returns_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let response = reqwest::Client::new()
        .delete(format!("{}/api/notes/ghost", server.base_url))
        .send()
        .await?;

    assert_eq!(response.status(), 404);
    Ok(())
}

#[tokio::test]
async fn given_failing_storage_when_creating_then_returns_500_with_generic_body() -> Result<()> {
    let state = AppState::new(MemoryStore::builder().with_failing_writes().build());
    let base_url = spawn_app(state).await?;

    let response = create(&base_url, json!({ "title": "Unlucky" })).await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await?;
    // Storage detail stays in the logs, not the response.
    assert_eq!(body["error"], "Internal server error");
    Ok(())
}

#[tokio::test]
async fn given_created_notes_when_restarting_then_state_round_trips() -> Result<()> {
    let server = TestServer::spawn().await?;
    create(&server.base_url, json!({ "title": "One", "content": "first\nnote" })).await;
    create(&server.base_url, json!({ "title": "Two", "content": "second" })).await;
    let before = list(&server.base_url).await;

    // Fresh server and store over the same file
    let restarted_url = server.respawn().await?;
    let after = list(&restarted_url).await;

    assert_eq!(after, before);
    // And the store itself reads the same notes back.
    assert_eq!(server.open_store().read_all(), before);
    Ok(())
}
