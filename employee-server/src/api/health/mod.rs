//! Liveness and health routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | / | GET | welcome message |
//! | /health | GET | health check with database status |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "database": "connected"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::types::MessageResponse;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// connected | disconnected
    database: &'static str,
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Employee Management API!"))
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let connected = state.db.is_connected();
    Json(HealthResponse {
        status: if connected { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if connected { "connected" } else { "disconnected" },
    })
}
