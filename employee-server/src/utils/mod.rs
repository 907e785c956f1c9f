//! Utilities: error type, result alias, logging, shared request types
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`AppResponse`] - JSON error envelope
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - field validators shared by the schema types

pub mod error;
pub mod logger;
pub mod result;
pub mod types;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
