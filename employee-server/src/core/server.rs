//! Server Implementation
//!
//! Router assembly, HTTP serving and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::middleware::logging_middleware;
use crate::core::{Config, Result, ServerState};

/// Build the Axum router bound to `state`
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C, then drain connections and close the database
    pub async fn run(&self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_addr()
            .parse()
            .with_context(|| format!("Invalid bind address {}", self.config.bind_addr()))?;

        let app = build_app(self.state.clone());
        let handle = axum_server::Handle::new();

        let shutdown_handle = handle.clone();
        let shutdown_timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(shutdown_timeout));
        });

        tracing::info!("Employee server listening on {}", addr);

        let served = axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server error");

        self.state.shutdown();
        served?;

        Ok(())
    }
}
