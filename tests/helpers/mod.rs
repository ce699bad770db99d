#![allow(dead_code)] // not every test binary uses every fixture

use anyhow::{Context, Result};
use notekeep::infrastructure::JsonFileStore;
use notekeep::server::{router, AppState};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture running the real note server over a temporary JSON store.
#[allow(dead_code)]
pub struct TestServer {
    pub base_url: String,
    pub data_file: PathBuf,
    _temp_dir: TempDir,
}

impl TestServer {
    /// Spawn a server on an ephemeral port with an empty store.
    pub async fn spawn() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_file = temp_dir.path().join("notes.json");

        let base_url = spawn_app(AppState::new(JsonFileStore::new(&data_file))).await?;

        Ok(Self {
            base_url,
            data_file,
            _temp_dir: temp_dir,
        })
    }

    /// Spawn a second server over this fixture's data file, simulating a
    /// restart against the same persisted state.
    pub async fn respawn(&self) -> Result<String> {
        spawn_app(AppState::new(JsonFileStore::new(&self.data_file))).await
    }

    /// Fresh store handle over the same file, bypassing the HTTP layer.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_file)
    }
}

/// Bind the router to an ephemeral port and serve it in the background.
pub async fn spawn_app(state: AppState) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let app = router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    Ok(format!("http://{addr}"))
}
