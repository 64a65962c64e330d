// src/server/mod.rs

//! Pantry web server
//!
//! Serves the recipe-lookup form, renders results, and exposes a small JSON
//! API over the same engine. State is a plain `Arc`: the catalog is read-only
//! for the process lifetime, so concurrent request handlers never race with a
//! writer and no lock is needed.

mod config;
mod handlers;
mod routes;

pub use config::PantryConfig;
pub use routes::create_router;

use crate::catalog::Catalog;
use crate::engine::MatchEngine;
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Optional TOML catalog file; builtin catalog when absent
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("static bind address"),
            catalog_path: None,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub engine: MatchEngine,
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            engine: MatchEngine::new(Arc::new(catalog)),
        }
    }
}

/// Start the pantry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };

    tracing::info!("Starting pantry server on {}", config.bind_addr);
    tracing::info!(
        "Catalog: {} recipes ({})",
        catalog.len(),
        config
            .catalog_path
            .as_ref()
            .map_or("builtin".to_string(), |p| p.display().to_string())
    );

    let state = Arc::new(ServerState::new(catalog));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Pantry is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
