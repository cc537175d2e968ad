//! Database connection module for the Aarogya AI application
//!
//! Provides a process-wide SQLite connection pool (r2d2 + rusqlite). When the
//! configured database file cannot be opened the pool falls back to an
//! in-memory SQLite database so the API stays usable.

use once_cell::sync::OnceCell;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Global database pool used throughout the application
static DB_POOL: OnceCell<DatabasePool> = OnceCell::new();

/// Database connection pool
#[derive(Debug, Clone)]
pub enum DatabasePool {
    /// SQLite connection pool
    #[cfg(feature = "sqlite")]
    SQLite(Arc<r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>>),
}

/// Database error
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error
    #[error("SQLite error: {0}")]
    #[cfg(feature = "sqlite")]
    SqliteError(#[from] rusqlite::Error),

    /// SQLite connection pool error
    #[error("SQLite connection pool error: {0}")]
    #[cfg(feature = "sqlite")]
    SqlitePoolError(#[from] r2d2::Error),

    /// Database pool already initialized
    #[error("Database pool is already initialized")]
    PoolAlreadyInitialized,

    /// Database pool not initialized
    #[error("Database pool is not initialized")]
    PoolNotInitialized,

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    GenericError(String),
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub sqlite_path: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: "./data/aarogya.db".to_string(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Self {
        let sqlite_path =
            env::var("DB_SQLITE_PATH").unwrap_or_else(|_| "./data/aarogya.db".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        let timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        info!(
            "Database configuration: path={}, max_connections={}, timeout={}s",
            sqlite_path, max_connections, timeout_seconds
        );

        DatabaseConfig {
            sqlite_path,
            max_connections,
            timeout_seconds,
        }
    }
}

/// Initialize the database connection pool
pub fn initialize_database_pool() -> Result<(), DatabaseError> {
    if DB_POOL.get().is_some() {
        return Err(DatabaseError::PoolAlreadyInitialized);
    }

    let config = DatabaseConfig::from_env();

    let pool = initialize_sqlite_pool(&config)?;

    match DB_POOL.set(pool) {
        Ok(_) => {
            run_migrations()?;
            Ok(())
        }
        Err(_) => Err(DatabaseError::PoolAlreadyInitialized),
    }
}

/// Get the database connection pool
pub fn get_db_pool() -> Result<DatabasePool, DatabaseError> {
    DB_POOL.get().cloned().ok_or(DatabaseError::PoolNotInitialized)
}

/// Initialize SQLite connection pool
#[cfg(feature = "sqlite")]
fn initialize_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    use rusqlite::OpenFlags;
    use std::fs;
    use std::path::Path;

    info!("Initializing SQLite database at: {}", config.sqlite_path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        if !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(
                    "Failed to create directory: {}, falling back to in-memory database",
                    e
                );
                return initialize_in_memory_sqlite_pool(config);
            }
        }
    }

    let manager = r2d2_sqlite::SqliteConnectionManager::file(&config.sqlite_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    match r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .build(manager)
    {
        Ok(pool) => match pool.get() {
            Ok(_) => {
                info!("SQLite connection pool created successfully");
                Ok(DatabasePool::SQLite(Arc::new(pool)))
            }
            Err(e) => {
                error!("Failed to connect to SQLite database: {}", e);
                warn!("Falling back to in-memory SQLite database");
                initialize_in_memory_sqlite_pool(config)
            }
        },
        Err(e) => {
            error!("Failed to create SQLite connection pool: {}", e);
            warn!("Falling back to in-memory SQLite database");
            initialize_in_memory_sqlite_pool(config)
        }
    }
}

/// Initialize an in-memory SQLite database as fallback
#[cfg(feature = "sqlite")]
fn initialize_in_memory_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing in-memory SQLite database");

    let manager = r2d2_sqlite::SqliteConnectionManager::memory();

    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .build(manager)?;

    // Initialize schema directly since run_migrations requires the global pool
    let conn = pool.get()?;
    super::migrations::run_sqlite_migrations(&conn)
        .map_err(DatabaseError::MigrationError)?;

    info!("In-memory SQLite database initialized successfully");
    Ok(DatabasePool::SQLite(Arc::new(pool)))
}

/// Run database migrations
fn run_migrations() -> Result<(), DatabaseError> {
    let pool = get_db_pool()?;

    info!("Running database migrations");

    match pool {
        #[cfg(feature = "sqlite")]
        DatabasePool::SQLite(ref pool) => {
            let conn = pool.get().map_err(DatabaseError::SqlitePoolError)?;
            super::migrations::run_sqlite_migrations(&conn)
                .map_err(DatabaseError::MigrationError)?;
        }
    }

    info!("Database migrations completed successfully");

    Ok(())
}

/// Get information about the current database connection
pub fn get_connection_info() -> Option<String> {
    let pool = DB_POOL.get()?;

    match pool {
        #[cfg(feature = "sqlite")]
        DatabasePool::SQLite(pool) => match pool.get() {
            Ok(conn) => {
                let connection_info = match rusqlite::Connection::query_row_and_then(
                    &conn,
                    "PRAGMA database_list",
                    [],
                    |row| row.get::<_, String>(2),
                ) {
                    Ok(path) => {
                        if path.is_empty() || path == ":memory:" {
                            "SQLite in-memory database".to_string()
                        } else {
                            format!("SQLite database at {}", path)
                        }
                    }
                    Err(_) => "SQLite database (path unknown)".to_string(),
                };

                let state = pool.state();
                Some(format!(
                    "{} (connections: active={}, idle={})",
                    connection_info, state.connections, state.idle_connections
                ))
            }
            Err(e) => {
                error!("Failed to get SQLite connection: {}", e);
                Some(format!("SQLite connection error: {}", e))
            }
        },
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.sqlite_path, "./data/aarogya.db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_in_memory_pool_runs_migrations() {
        let config = DatabaseConfig::default();
        let pool = initialize_in_memory_sqlite_pool(&config).unwrap();

        let DatabasePool::SQLite(pool) = pool;
        let conn = pool.get().unwrap();

        // All four tables must exist after migration
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('emergency_contacts', 'water_logs', 'sleep_logs', 'prescriptions')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}
