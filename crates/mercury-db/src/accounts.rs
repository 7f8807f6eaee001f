//! Credential store.
//!
//! Every function takes any SQLite executor, so callers may run it straight
//! on the pool or chain several calls inside one `Transaction`.

use mercury_models::{Account, AccountId, NewProfile, Profile, Role};
use sqlx::{Executor, Sqlite};

pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Account>(
        "SELECT uid, email, password_hash, role FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, uid: AccountId) -> Result<Option<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Account>("SELECT uid, email, password_hash, role FROM users WHERE uid = ?")
        .bind(uid)
        .fetch_optional(executor)
        .await
}

/// Current role of the account holding `email`, if any.
pub async fn find_role_by_email<'e, E>(executor: E, email: &str) -> Result<Option<Role>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await
}

pub async fn find_profile<'e, E>(executor: E, uid: AccountId) -> Result<Option<Profile>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Profile>(
        "SELECT id, user_id, first_name, last_name, birth_date, address, phone
         FROM persons WHERE user_id = ?",
    )
    .bind(uid)
    .fetch_optional(executor)
    .await
}

pub async fn insert_account<'e, E>(
    executor: E,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<AccountId, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, AccountId>(
        "INSERT INTO users (email, password_hash, role) VALUES (?, ?, ?) RETURNING uid",
    )
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(executor)
    .await
}

pub async fn insert_profile<'e, E>(
    executor: E,
    uid: AccountId,
    profile: &NewProfile,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO persons (user_id, first_name, last_name, birth_date, address, phone)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(uid)
    .bind(&profile.first_name)
    .bind(&profile.last_name)
    .bind(profile.birth_date)
    .bind(&profile.address)
    .bind(&profile.phone)
    .execute(executor)
    .await?;

    Ok(())
}

/// Replaces the digest only if it still equals `expected_hash`.
///
/// Returns the number of rows changed: `0` means the account vanished or its
/// password was changed concurrently.
pub async fn update_password_hash<'e, E>(
    executor: E,
    uid: AccountId,
    expected_hash: &str,
    new_hash: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result =
        sqlx::query("UPDATE users SET password_hash = ? WHERE uid = ? AND password_hash = ?")
            .bind(new_hash)
            .bind(uid)
            .bind(expected_hash)
            .execute(executor)
            .await?;

    Ok(result.rows_affected())
}

pub async fn update_role<'e, E>(executor: E, email: &str, role: Role) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE users SET role = ? WHERE email = ?")
        .bind(role)
        .bind(email)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_profile<'e, E>(executor: E, uid: AccountId) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM persons WHERE user_id = ?")
        .bind(uid)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_account<'e, E>(executor: E, uid: AccountId) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM users WHERE uid = ?")
        .bind(uid)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MIGRATOR, SqlitePool};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    fn profile() -> NewProfile {
        NewProfile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = pool().await;
        let uid = insert_account(&pool, "ada@x.com", "digest", Role::Teacher)
            .await
            .unwrap();
        insert_profile(&pool, uid, &profile()).await.unwrap();

        let account = find_by_email(&pool, "ada@x.com").await.unwrap().unwrap();
        assert_eq!(account.uid, uid);
        assert_eq!(account.role, Role::Teacher);
        assert_eq!(
            find_role_by_email(&pool, "ada@x.com").await.unwrap(),
            Some(Role::Teacher)
        );
        assert_eq!(find_profile(&pool, uid).await.unwrap().unwrap().first_name, "Ada");
        assert!(find_by_email(&pool, "nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let pool = pool().await;
        insert_account(&pool, "a@x.com", "d1", Role::Student).await.unwrap();
        let err = insert_account(&pool, "a@x.com", "d2", Role::Student)
            .await
            .unwrap_err();
        assert!(err.as_database_error().unwrap().is_unique_violation());
    }

    #[tokio::test]
    async fn test_password_update_is_compare_and_set() {
        let pool = pool().await;
        let uid = insert_account(&pool, "a@x.com", "old", Role::Student).await.unwrap();

        assert_eq!(update_password_hash(&pool, uid, "stale", "new").await.unwrap(), 0);
        assert_eq!(update_password_hash(&pool, uid, "old", "new").await.unwrap(), 1);

        let account = find_by_id(&pool, uid).await.unwrap().unwrap();
        assert_eq!(account.password_hash, "new");
    }

    #[tokio::test]
    async fn test_account_with_profile_cannot_be_deleted_first() {
        let pool = pool().await;
        let uid = insert_account(&pool, "a@x.com", "d", Role::Student).await.unwrap();
        insert_profile(&pool, uid, &profile()).await.unwrap();

        assert!(delete_account(&pool, uid).await.is_err());
        assert_eq!(delete_profile(&pool, uid).await.unwrap(), 1);
        assert_eq!(delete_account(&pool, uid).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_role() {
        let pool = pool().await;
        insert_account(&pool, "a@x.com", "d", Role::Teacher).await.unwrap();
        assert_eq!(update_role(&pool, "a@x.com", Role::Student).await.unwrap(), 1);
        assert_eq!(update_role(&pool, "b@x.com", Role::Student).await.unwrap(), 0);
        assert_eq!(
            find_role_by_email(&pool, "a@x.com").await.unwrap(),
            Some(Role::Student)
        );
    }
}
