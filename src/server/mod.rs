// Repochat - HTTP Server Module
// Stateless JSON API: load a repository, then ask questions against it

mod handlers;
pub mod types;

pub use handlers::{create_router, handle_chat, handle_fetch_repo, health_check};
pub use types::*;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::claude::ChatRelay;
use crate::config::Config;
use crate::github::{GitHubClient, RepoFetcher};

/// Shared, read-only state behind every handler.
///
/// Nothing here changes between requests; the repository context lives
/// with the client and is sent back with each question.
pub struct AppState {
    config: Config,
    fetcher: RepoFetcher,
    relay: ChatRelay,
}

impl AppState {
    pub fn new(config: Config, fetcher: RepoFetcher, relay: ChatRelay) -> Self {
        Self {
            config,
            fetcher,
            relay,
        }
    }

    /// Build the GitHub fetcher and chat relay described by `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let github = GitHubClient::from_config(&config)?;
        let fetcher = RepoFetcher::new(github, config.limits);
        let relay = ChatRelay::from_config(&config)?;
        Ok(Self::new(config, fetcher, relay))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &RepoFetcher {
        &self.fetcher
    }

    pub fn relay(&self) -> &ChatRelay {
        &self.relay
    }
}

/// Main server structure
pub struct AppServer {
    state: Arc<AppState>,
}

impl AppServer {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::from_config(config)?),
        })
    }

    /// Full router with body limit, CORS and request tracing
    pub fn router(&self) -> axum::Router {
        let body_limit = self.state.config().limits.request_body_limit();
        create_router(Arc::clone(&self.state))
            .layer(axum::extract::DefaultBodyLimit::max(body_limit))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .state
            .config()
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.state.config().bind_address))?;

        if !self.state.relay().is_configured() {
            tracing::warn!("ANTHROPIC_API_KEY is not set; questions will fail until it is configured");
        }

        let app = self.router();

        tracing::info!("Starting repochat server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
