//! # Mercury Config
//!
//! Configuration structures loaded once from environment variables at startup:
//!
//! - [`jwt`]: token signing secret (`JWT_KEY`, required)
//! - [`admin`]: initial admin credentials (`ADMIN_EMAIL`, `ADMIN_PASSWORD`, required)
//! - [`database`]: storage location (`DB_PATH`)
//! - [`server`]: listen address (`HOST`, `PORT`)
//! - [`cors`]: allowed origins (`ALLOWED_ORIGINS`)
//! - [`logging`]: log level and log directory (`LOG_LEVEL`, `LOG_DIR`)
//!
//! Each config exposes `from_env()` and a `from_lookup()` variant that reads
//! from an arbitrary key/value source, which keeps tests off the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use mercury_config::AppConfig;
//!
//! let config = AppConfig::from_env().unwrap_or_else(|e| {
//!     eprintln!("{e}");
//!     std::process::exit(1);
//! });
//! ```

pub mod admin;
pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod server;

pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use logging::LogConfig;
pub use server::ServerConfig;

/// Every configuration section the server needs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jwt: JwtConfig::from_lookup(&lookup)?,
            admin: AdminConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup),
            logging: LogConfig::from_lookup(&lookup),
        })
    }
}

/// Reads a variable that must be present and non-empty.
pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }
}
