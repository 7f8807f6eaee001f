use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use mercury_auth::create_token;
use mercury_config::JwtConfig;
use mercury_core::{AppError, verify_password};
use mercury_db::accounts;
use mercury_models::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let account = accounts::find_by_email(db, &dto.email)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?;

        let Some(account) = account else {
            warn!("Login for unknown email");
            return Err(AppError::unauthorized(
                "Invalid email credentials".to_string(),
            ));
        };

        if !verify_password(&dto.password, &account.password_hash)? {
            warn!(uid = %account.uid, "Login with wrong password");
            return Err(AppError::unauthorized(
                "Invalid password credentials".to_string(),
            ));
        }

        let token = create_token(&account.email, account.role, jwt_config)?;
        info!(uid = %account.uid, role = %account.role, "Login succeeded");

        Ok(LoginResponse {
            token,
            role: account.role,
        })
    }
}
