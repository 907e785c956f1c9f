//! API routes
//!
//! # Layout
//!
//! - [`health`] - liveness and health check
//! - [`employees`] - employee CRUD, search and aggregates
//! - [`extract`] - validating request extractors

pub mod employees;
pub mod extract;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
