/// SQLite storage location.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// Path of the database file; `:memory:` selects an in-memory database.
    pub path: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            path: lookup("DB_PATH").unwrap_or_else(|| "./database.db".to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
