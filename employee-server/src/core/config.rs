use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// All fields can be overridden through the environment (a `.env` file is
/// loaded first when present):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database lives under it) |
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | DB_NAMESPACE | employee | SurrealDB namespace |
/// | DB_NAME | assessment_db | SurrealDB database |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | log filter when RUST_LOG is unset |
/// | LOG_DIR | - | directory for daily rolling log files |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown budget (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/employees HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    pub http_host: String,
    pub http_port: u16,
    pub db_namespace: String,
    pub db_name: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: env_or("WORK_DIR", "./data"),
            http_host: env_or("HTTP_HOST", "0.0.0.0"),
            http_port: env_parse("HTTP_PORT", 8000),
            db_namespace: env_or("DB_NAMESPACE", "employee"),
            db_name: env_or("DB_NAME", "assessment_db"),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
        }
    }

    /// Override a subset of settings
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Database directory: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Create the working directory structure
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
