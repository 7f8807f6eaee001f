//! Mapping of SQLite constraint failures onto client errors.

use anyhow::anyhow;
use mercury_core::AppError;

pub const MISSING_REFERENCE: &str = "Referenced record does not exist";

/// Converts a failed insert into an [`AppError`].
///
/// A unique violation becomes 409 with `conflict_message`, a foreign key
/// violation becomes 400. Anything else is an internal error carrying
/// `context`.
pub fn map_insert_error(err: sqlx::Error, conflict_message: &str, context: &str) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::conflict(anyhow!("{}", conflict_message));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::bad_request(anyhow!(MISSING_REFERENCE));
        }
    }
    AppError::database(anyhow::Error::new(err).context(context.to_string()))
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

const SQLITE_BUSY: i32 = 5;

/// Whether another connection held the write lock. Covers every extended
/// `SQLITE_BUSY_*` code, including a stale read snapshot.
pub fn is_busy(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| code & 0xff == SQLITE_BUSY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct CodedError(&'static str);

    impl fmt::Display for CodedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "sqlite error {}", self.0)
        }
    }

    impl std::error::Error for CodedError {}

    impl DatabaseError for CodedError {
        fn message(&self) -> &str {
            "database is locked"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn coded(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(CodedError(code)))
    }

    #[test]
    fn test_busy_codes() {
        assert!(is_busy(&coded("5")));
        // SQLITE_BUSY_SNAPSHOT and SQLITE_BUSY_TIMEOUT
        assert!(is_busy(&coded("517")));
        assert!(is_busy(&coded("773")));

        assert!(!is_busy(&coded("2067")));
        assert!(!is_busy(&coded("787")));
        assert!(!is_busy(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_non_database_error_is_internal() {
        let err = map_insert_error(sqlx::Error::RowNotFound, "taken", "Failed to insert");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}
