use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;

/// Claims carried by a session token.
///
/// `email` identifies the account; `role` is the role the account held at
/// issuance. Guards that gate on a role re-check it against the store, since
/// a token outlives role changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_wire_shape() {
        let claims = Claims {
            email: "a@x.com".to_string(),
            role: Role::Teacher,
            iat: 1_700_000_000,
            exp: 1_700_604_800,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["role"], "teacher");
        assert_eq!(json["exp"], 1_700_604_800i64);
    }

    #[test]
    fn test_claims_reject_unknown_role() {
        let json = r#"{"email":"a@x.com","role":"root","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
