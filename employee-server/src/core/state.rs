use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::utils::AppResult;

/// Server state - the context handed to every handler
///
/// Cloning is cheap: the database handle sits behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | settings (immutable) |
/// | db | DbService | embedded SurrealDB connection |
///
/// # Example
///
/// ```ignore
/// let repo = state.employees()?;
/// let employee = repo.find_by_employee_id("E1").await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    /// Build state from parts (tests inject an unopened [`DbService`] here)
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Initialize server state
    ///
    /// 1. Work directory structure
    /// 2. Database (work_dir/database), including the unique index
    pub async fn initialize(config: &Config) -> crate::core::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = DbService::open(&config.database_dir(), &config.db_namespace, &config.db_name)
            .await?;

        Ok(Self::new(config.clone(), db))
    }

    /// Employee repository, or `Uninitialized` when the store is not open
    pub fn employees(&self) -> AppResult<EmployeeRepository> {
        self.db.employees()
    }

    /// Release resources held by the state
    pub fn shutdown(&self) {
        self.db.close();
    }
}
