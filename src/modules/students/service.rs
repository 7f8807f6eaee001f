use anyhow::{Context, anyhow};
use sqlx::SqlitePool;

use mercury_core::AppError;
use mercury_db::accounts;
use mercury_models::{Account, AccountId, StudentInfo};

pub struct StudentService;

impl StudentService {
    /// The account behind `user_id`, or 404.
    pub async fn require_account(db: &SqlitePool, user_id: AccountId) -> Result<Account, AppError> {
        accounts::find_by_id(db, user_id)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// Resolves the caller's token email to an account id.
    pub async fn account_id_for(db: &SqlitePool, email: &str) -> Result<AccountId, AppError> {
        accounts::find_by_email(db, email)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?
            .map(|account| account.uid)
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    pub async fn info(db: &SqlitePool, user_id: AccountId) -> Result<StudentInfo, AppError> {
        let account = Self::require_account(db, user_id).await?;

        let profile = accounts::find_profile(db, account.uid)
            .await
            .context("Failed to fetch profile")
            .map_err(AppError::database)?;

        let classes: Vec<String> = sqlx::query_scalar(
            "SELECT class_name FROM class_members WHERE user_id = ? ORDER BY class_name",
        )
        .bind(account.uid)
        .fetch_all(db)
        .await
        .context("Failed to fetch classes")
        .map_err(AppError::database)?;

        Ok(StudentInfo {
            user_id: account.uid,
            email: account.email,
            role: account.role,
            profile,
            classes,
        })
    }
}
