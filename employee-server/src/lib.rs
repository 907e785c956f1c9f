//! Employee Server - employee records over an embedded document store
//!
//! # Overview
//!
//! - **HTTP API** (`api`): CRUD, paginated listing, skill search, salary aggregates
//! - **Database** (`db`): embedded SurrealDB storage, one document per employee
//! - **Core** (`core`): configuration, shared state, server lifecycle
//!
//! # Module layout
//!
//! ```text
//! employee-server/src/
//! ├── core/          # config, state, server, request logging
//! ├── api/           # routes, handlers, validating extractors
//! ├── db/            # connection, models, repositories
//! └── utils/         # errors, logging, shared types, validators
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState, build_app};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Prepare the process environment: work directory and logging
pub fn setup_environment(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    config.ensure_work_dir_structure()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  _____                 _
 | ____|_ __ ___  _ __ | | ___  _   _  ___  ___
 |  _| | '_ ` _ \| '_ \| |/ _ \| | | |/ _ \/ _ \
 | |___| | | | | | |_) | | (_) | |_| |  __/  __/
 |_____|_| |_| |_| .__/|_|\___/ \__, |\___|\___|
                 |_|            |___/
    "#
    );
}
