// src/lib.rs
pub mod application;
pub mod cli;
pub mod client;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod server;
pub mod util;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::infrastructure::{Config, JsonFileStore};
use crate::server::AppState;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeep with arguments");

    // Resolve configuration, CLI flags win over the config file
    let config = Config::resolve(args.config.as_deref())?;
    let data_file = args
        .data_file
        .unwrap_or_else(|| config.storage.data_file.clone());
    let bind: SocketAddr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", config.server.bind))?,
    };

    // Initialize infrastructure
    let store = JsonFileStore::new(&data_file);

    // Wire up the API
    let state = AppState::new(store);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(
        addr = %listener.local_addr()?,
        data_file = %data_file.display(),
        "Serving note API"
    );
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
