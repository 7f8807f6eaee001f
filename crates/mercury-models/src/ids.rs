//! Typed integer identifiers.
//!
//! Each table keys its rows with an SQLite `INTEGER PRIMARY KEY`. The newtypes
//! keep an account id from being passed where a subject id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            sqlx::Type, ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(v: i64) -> Self {
                Self(v)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }
    };
}

define_id!(
    /// Identifier of a row in `users`.
    AccountId
);
define_id!(
    /// Identifier of a row in `classes`.
    ClassId
);
define_id!(
    /// Identifier of a row in `subjects`.
    SubjectId
);
define_id!(
    /// Identifier of a timetable, grade, attendance or exam row.
    RecordId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&AccountId(42)).unwrap(), "42");
        let id: SubjectId = serde_json::from_str("7").unwrap();
        assert_eq!(id, SubjectId::new(7));
    }

    #[test]
    fn test_id_debug_names_the_type() {
        assert_eq!(format!("{:?}", AccountId(3)), "AccountId(3)");
        assert_eq!(AccountId(3).to_string(), "3");
    }
}
