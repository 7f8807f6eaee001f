#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    /// Directory for rolling JSON log files. `None` disables file output.
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            dir: match lookup("LOG_DIR") {
                Some(dir) if dir.is_empty() => None,
                Some(dir) => Some(dir),
                None => Some("storage/logs".to_string()),
            },
        }
    }
}
