use thiserror::Error;

use crate::utils::AppError;

/// Startup and serving failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to prepare work directory: {0}")]
    WorkDir(#[from] std::io::Error),

    #[error("Database unavailable: {0}")]
    Database(#[from] AppError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server bootstrap code
pub type Result<T> = std::result::Result<T, ServerError>;
