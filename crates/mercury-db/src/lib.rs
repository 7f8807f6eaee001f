//! # Mercury DB
//!
//! SQLite connection pool, embedded migrations and the credential store.
//!
//! # Example
//!
//! ```ignore
//! use mercury_config::DatabaseConfig;
//! use mercury_db::{MIGRATOR, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! MIGRATOR.run(&pool).await?;
//! ```

pub mod accounts;

use std::str::FromStr;

use mercury_config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::migrate::Migrator;

pub use sqlx::SqlitePool;

/// Schema migrations compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const MEMORY_PATH: &str = ":memory:";

/// Opens a connection pool for the configured database file.
///
/// The file is created when missing and foreign keys are enforced on every
/// connection. An in-memory database is limited to a single connection that
/// is never recycled, since each SQLite connection would otherwise see its own
/// empty database.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = config.path == MEMORY_PATH;
    let url = if in_memory {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite://{}", config.path)
    };

    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(path = %config.path, "Database pool ready");
    Ok(pool)
}

/// Opens the configured database and applies pending migrations.
pub async fn init_and_migrate(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = init_db_pool(config).await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
