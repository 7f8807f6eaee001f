use std::sync::Arc;

use mercury_config::{CorsConfig, JwtConfig};
use sqlx::SqlitePool;

use crate::modules::lucky_number::LuckyNumber;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub lucky_number: Arc<LuckyNumber>,
}

impl AppState {
    pub fn new(db: SqlitePool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
            lucky_number: Arc::new(LuckyNumber::default()),
        }
    }
}
