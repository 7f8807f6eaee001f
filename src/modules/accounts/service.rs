use anyhow::{Context, anyhow};
use axum::http::StatusCode;
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::{info, instrument, warn};

use mercury_auth::Role;
use mercury_config::AdminConfig;
use mercury_core::{AppError, hash_password, verify_password};
use mercury_db::accounts;
use mercury_models::{
    Account, AccountId, ChangePasswordRequest, NewProfile, RegisterRequest, UserInfo,
};

use crate::utils::db::{is_busy, is_foreign_key_violation, map_insert_error};

pub const EMAIL_TAKEN: &str = "Email already taken";
const USER_NOT_FOUND: &str = "User not found";
const PASSWORD_RACE: &str = "Password was changed by another request";

pub struct AccountService;

impl AccountService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(db: &SqlitePool, dto: RegisterRequest) -> Result<AccountId, AppError> {
        let role = dto
            .role
            .ok_or_else(|| AppError::bad_request(anyhow!("role is required")))?;
        let profile = dto.profile();

        Self::create_account(db, &dto.email, &dto.password, role, &profile).await
    }

    /// Creates an account and its profile in one transaction.
    ///
    /// The email pre-check only short-cuts the common case; the unique index
    /// decides when two registrations race.
    #[instrument(skip(db, password, profile))]
    pub async fn create_account(
        db: &SqlitePool,
        email: &str,
        password: &str,
        role: Role,
        profile: &NewProfile,
    ) -> Result<AccountId, AppError> {
        let existing = accounts::find_by_email(db, email)
            .await
            .context("Failed to check email")
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow!(EMAIL_TAKEN)));
        }

        let password_hash = hash_password(password)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let uid = accounts::insert_account(&mut *tx, email, &password_hash, role)
            .await
            .map_err(|e| map_insert_error(e, EMAIL_TAKEN, "Failed to insert account"))?;

        accounts::insert_profile(&mut *tx, uid, profile)
            .await
            .map_err(|e| map_insert_error(e, "Profile already exists", "Failed to insert profile"))?;

        tx.commit()
            .await
            .context("Failed to commit registration")
            .map_err(AppError::database)?;

        info!(uid = %uid, role = %role, "Account created");
        Ok(uid)
    }

    /// Replaces the password of `email` after verifying `old_password`.
    ///
    /// Read, verify and write share one transaction and the write only lands
    /// if the digest is still the one that was verified. Losing that race, or
    /// the SQLite write lock, is a 409.
    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &SqlitePool,
        email: &str,
        dto: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        if dto.new_password.trim().is_empty() {
            return Err(AppError::bad_request(anyhow!("new_password is required")));
        }

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let account = accounts::find_by_email(&mut *tx, email)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

        if !verify_password(&dto.old_password, &account.password_hash)? {
            warn!(uid = %account.uid, "Password change with wrong old password");
            return Err(AppError::unauthorized("Incorrect old password".to_string()));
        }

        let new_hash = hash_password(&dto.new_password)?;

        replace_password_hash(&mut *tx, &account, &new_hash).await?;

        tx.commit()
            .await
            .map_err(|e| map_contended_write(e, "Failed to commit password change"))?;

        info!(uid = %account.uid, "Password changed");
        Ok(())
    }

    /// Deletes the profile and then the account of `email`, atomically.
    #[instrument(skip(db))]
    pub async fn delete_account(db: &SqlitePool, email: &str) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let account = accounts::find_by_email(&mut *tx, email)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

        accounts::delete_profile(&mut *tx, account.uid)
            .await
            .map_err(|e| map_delete_error(e, "Failed to delete profile"))?;

        let deleted = accounts::delete_account(&mut *tx, account.uid)
            .await
            .map_err(|e| map_delete_error(e, "Failed to delete account"))?;

        if deleted == 0 {
            return Err(AppError::not_found(anyhow!(USER_NOT_FOUND)));
        }

        tx.commit()
            .await
            .context("Failed to commit account deletion")
            .map_err(AppError::database)?;

        info!(uid = %account.uid, "Account deleted");
        Ok(())
    }

    pub async fn user_info(db: &SqlitePool, email: &str) -> Result<UserInfo, AppError> {
        let account = accounts::find_by_email(db, email)
            .await
            .context("Failed to fetch account")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

        let profile = accounts::find_profile(db, account.uid)
            .await
            .context("Failed to fetch profile")
            .map_err(AppError::database)?;

        Ok(UserInfo {
            uid: account.uid,
            email: account.email,
            role: account.role,
            profile,
        })
    }

    #[instrument(skip(db))]
    pub async fn set_role(db: &SqlitePool, email: &str, role: Role) -> Result<(), AppError> {
        let updated = accounts::update_role(db, email, role)
            .await
            .context("Failed to update role")
            .map_err(AppError::database)?;

        if updated == 0 {
            return Err(AppError::not_found(anyhow!(USER_NOT_FOUND)));
        }

        info!(role = %role, "Role changed");
        Ok(())
    }

    /// Creates the configured admin account unless it already exists.
    ///
    /// Returns whether an account was created.
    pub async fn ensure_admin(db: &SqlitePool, config: &AdminConfig) -> Result<bool, AppError> {
        let profile = NewProfile {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            ..Default::default()
        };

        match Self::create_account(db, &config.email, &config.password, Role::Admin, &profile).await
        {
            Ok(_) => Ok(true),
            Err(err) if err.status == StatusCode::CONFLICT => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// Stores `new_hash` only if `account` still holds the digest it was read with.
async fn replace_password_hash<'e, E>(
    executor: E,
    account: &Account,
    new_hash: &str,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let updated =
        accounts::update_password_hash(executor, account.uid, &account.password_hash, new_hash)
            .await
            .map_err(|e| map_contended_write(e, "Failed to update password"))?;

    if updated == 0 {
        warn!(uid = %account.uid, "Password changed concurrently");
        return Err(AppError::conflict(anyhow!(PASSWORD_RACE)));
    }
    Ok(())
}

fn map_contended_write(err: sqlx::Error, context: &str) -> AppError {
    if is_busy(&err) {
        warn!(error = %err, "Password write lost the lock");
        return AppError::conflict(anyhow!(PASSWORD_RACE));
    }
    AppError::database(anyhow::Error::new(err).context(context.to_string()))
}

fn map_delete_error(err: sqlx::Error, context: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::conflict(anyhow!("Account is still referenced by other records"));
    }
    AppError::database(anyhow::Error::new(err).context(context.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercury_config::DatabaseConfig;
    use mercury_db::init_and_migrate;

    async fn memory_pool() -> SqlitePool {
        init_and_migrate(&DatabaseConfig {
            path: ":memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap()
    }

    fn profile() -> NewProfile {
        NewProfile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        }
    }

    async fn stored_hash(db: &SqlitePool, email: &str) -> String {
        accounts::find_by_email(db, email)
            .await
            .unwrap()
            .unwrap()
            .password_hash
    }

    #[tokio::test]
    async fn test_replace_password_hash_with_current_digest() {
        let db = memory_pool().await;
        AccountService::create_account(&db, "a@school.test", "pw1", Role::Student, &profile())
            .await
            .unwrap();
        let account = accounts::find_by_email(&db, "a@school.test")
            .await
            .unwrap()
            .unwrap();

        replace_password_hash(&db, &account, "new-digest").await.unwrap();
        assert_eq!(stored_hash(&db, "a@school.test").await, "new-digest");
    }

    #[tokio::test]
    async fn test_replace_password_hash_after_concurrent_change_conflicts() {
        let db = memory_pool().await;
        AccountService::create_account(&db, "a@school.test", "pw1", Role::Student, &profile())
            .await
            .unwrap();
        let account = accounts::find_by_email(&db, "a@school.test")
            .await
            .unwrap()
            .unwrap();

        // Another request rotates the digest after `account` was read.
        sqlx::query("UPDATE users SET password_hash = 'rotated-elsewhere' WHERE uid = ?")
            .bind(account.uid)
            .execute(&db)
            .await
            .unwrap();

        let err = replace_password_hash(&db, &account, "new-digest")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.public_message(), PASSWORD_RACE);
        assert_eq!(stored_hash(&db, "a@school.test").await, "rotated-elsewhere");
    }

    #[tokio::test]
    async fn test_unique_violation_at_insert_is_email_taken() {
        let db = memory_pool().await;

        // Lets the email pre-check pass, then lands a competing row inside
        // the insert statement itself.
        sqlx::query(
            "CREATE TRIGGER competing_registration BEFORE INSERT ON users
             WHEN NEW.password_hash <> 'competitor'
             BEGIN
                 INSERT INTO users (email, password_hash, role)
                 VALUES (NEW.email, 'competitor', 'student');
             END;",
        )
        .execute(&db)
        .await
        .unwrap();

        let err =
            AccountService::create_account(&db, "race@school.test", "pw1", Role::Teacher, &profile())
                .await
                .unwrap_err();

        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.public_message(), EMAIL_TAKEN);

        let persons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(persons, 0);
    }
}
