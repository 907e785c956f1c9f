//! Database Module
//!
//! Owns the embedded SurrealDB connection and hands out repositories.

pub mod models;
pub mod repository;

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

/// Database service
///
/// Holds the store handle between startup and shutdown. Repository lookups
/// outside that window fail with [`AppError::Uninitialized`].
#[derive(Clone, Debug, Default)]
pub struct DbService {
    handle: Arc<RwLock<Option<Surreal<Db>>>>,
}

impl DbService {
    /// A service with no open connection
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Open the store at `db_path`, select namespace/database and ensure indexes
    pub async fn open(db_path: &Path, namespace: &str, database: &str) -> AppResult<Self> {
        let service = Self::uninitialized();
        service.connect(db_path, namespace, database).await?;
        Ok(service)
    }

    /// Connect to the store
    pub async fn connect(&self, db_path: &Path, namespace: &str, database: &str) -> AppResult<()> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            path = %db_path.display(),
            namespace,
            database,
            "Database connection established (SurrealDB RocksDB)"
        );

        self.attach(db).await;
        Ok(())
    }

    /// Adopt an open connection, ensuring indexes first
    ///
    /// A failed index definition is logged and the connection is kept.
    pub async fn attach(&self, db: Surreal<Db>) {
        match EmployeeRepository::new(db.clone()).ensure_indexes().await {
            Ok(()) => tracing::info!("Unique index on employee_id ensured"),
            Err(e) => tracing::warn!(error = %e, "Error creating index"),
        }

        *self.handle.write() = Some(db);
    }

    /// Release the connection
    pub fn close(&self) {
        if self.handle.write().take().is_some() {
            tracing::info!("Database connection closed");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.read().is_some()
    }

    /// The active store handle
    pub fn db(&self) -> AppResult<Surreal<Db>> {
        self.handle.read().clone().ok_or(AppError::Uninitialized)
    }

    /// Repository over the employee table
    pub fn employees(&self) -> AppResult<EmployeeRepository> {
        self.db().map(EmployeeRepository::new)
    }
}
