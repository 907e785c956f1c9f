//! Core: configuration, server state and bootstrap
//!
//! # Module layout
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - context shared with every handler
//! - [`Server`] - HTTP server and lifecycle
//! - [`ServerError`] - bootstrap errors

pub mod config;
pub mod error;
pub mod middleware;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::{Server, build_app};
pub use state::ServerState;
