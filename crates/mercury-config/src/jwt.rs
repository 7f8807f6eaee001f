use std::fmt;

use crate::{ConfigError, required};

/// Token signing configuration.
///
/// The secret is loaded once at startup and never rotated at runtime.
/// Token lifetime is fixed (see `mercury_auth::TOKEN_TTL_SECS`) and is therefore
/// not configurable here.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            secret: required(lookup, "JWT_KEY")?,
        })
    }
}

// Keep the secret out of logs and `#[instrument]` spans.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lookup_from;

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = JwtConfig::from_lookup(&lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_KEY")));
    }

    #[test]
    fn test_blank_secret_is_an_error() {
        let err = JwtConfig::from_lookup(&lookup_from(&[("JWT_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_KEY")));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }
}
