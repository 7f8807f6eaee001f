//! Accounts, profiles and the account-level request bodies.

use chrono::NaiveDate;
use mercury_auth::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::AccountId;
use crate::serde_helpers::deserialize_optional_date;
use crate::validation::{validate_email_address, validate_not_blank};

/// A row of `users`.
///
/// The password digest is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Account {
    pub uid: AccountId,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: Role,
}

/// A row of `persons`: the personal record owned by exactly one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub id: i64,
    pub user_id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Profile fields supplied when an account is created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/admin/register`.
///
/// Unknown keys are rejected. Required keys default to empty so that every
/// missing field is reported at once by validation rather than the first one
/// by the deserializer. Blank strings count as missing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "password is required"))]
    pub password: String,
    #[validate(required(message = "role is required"))]
    pub role: Option<Role>,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "first_name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "last_name is required"))]
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn profile(&self) -> NewProfile {
        NewProfile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date,
            address: non_empty(self.address.as_deref()),
            phone: non_empty(self.phone.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: AccountId,
}

/// Body of `PUT /api/change-password`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "old_password is required"))]
    pub old_password: String,
    #[validate(custom(function = "validate_not_blank", message = "new_password is required"))]
    pub new_password: String,
}

/// Body of `GET /api/user`: the caller's account and profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub uid: AccountId,
    pub email: String,
    pub role: Role,
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_unknown_keys() {
        let json = r#"{"email":"a@x.com","password":"pw1","role":"teacher",
            "first_name":"A","last_name":"B","argument":{}}"#;
        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }

    #[test]
    fn test_register_request_reports_all_missing_fields() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("role"));
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_register_request_profile_drops_blank_optionals() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw1","role":"teacher",
                "first_name":"A","last_name":"B","address":"  ","phone":"555-0100",
                "birth_date":"2001-02-03"}"#,
        )
        .unwrap();
        let profile = request.profile();

        assert_eq!(profile.address, None);
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(2001, 2, 3));
    }

    #[test]
    fn test_register_request_rejects_blank_required_fields() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"   ","password":" ","role":"student","first_name":"  ","last_name":"\t"}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["email", "password", "first_name", "last_name"] {
            assert!(fields.contains_key(field), "{} accepted while blank", field);
        }
    }

    #[test]
    fn test_register_request_rejects_malformed_email() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"not-an-email","password":"pw1","role":"student",
                "first_name":"A","last_name":"B"}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_empty_birth_date_is_none() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw1","role":"teacher",
                "first_name":"A","last_name":"B","birth_date":""}"#,
        )
        .unwrap();
        assert_eq!(request.birth_date, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_change_password_request_rejects_blank_new_password() {
        let request = ChangePasswordRequest {
            old_password: "old".to_string(),
            new_password: "   ".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_account_never_serializes_password_hash() {
        let account = Account {
            uid: AccountId(1),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::Student,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }
}
