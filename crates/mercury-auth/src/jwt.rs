//! Session token issuance and verification.
//!
//! A token is a compact HS256 JWT over [`Claims`]. Verification never
//! partially trusts a token: any failure yields a [`TokenError`] and no
//! identity. The signature is checked before expiry, so an expired token
//! signed with another key reports [`TokenError::Malformed`].

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use mercury_config::JwtConfig;
use mercury_core::AppError;

use crate::claims::Claims;
use crate::role::Role;

/// Token lifetime: exactly seven days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

const BEARER_PREFIX: &str = "Bearer ";

/// Why a presented token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Missing token")]
    Missing,
    #[error("Invalid token")]
    Malformed,
    #[error("Token expired")]
    Expired,
}

impl TokenError {
    pub fn into_app_error(self) -> AppError {
        AppError::unauthorized(self.to_string())
    }
}

/// Issues a token for `email` with `role`, valid for [`TOKEN_TTL_SECS`] from now.
pub fn create_token(email: &str, role: Role, jwt_config: &JwtConfig) -> Result<String, AppError> {
    create_token_at(email, role, Utc::now(), jwt_config)
}

/// Issues a token as if it had been created at `issued_at`.
pub fn create_token_at(
    email: &str,
    role: Role,
    issued_at: DateTime<Utc>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal_error(
            "Signing secret is not configured".to_string(),
        ));
    }

    let iat = issued_at.timestamp();
    let claims = Claims {
        email: email.to_string(),
        role,
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Decodes and validates a token, reporting why it was rejected.
pub fn decode_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    if token.trim().is_empty() {
        return Err(TokenError::Missing);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })
}

/// [`decode_token`] with the failure mapped to a 401 [`AppError`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode_token(token, jwt_config).map_err(TokenError::into_app_error)
}

/// Extracts the token from an `Authorization` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, TokenError> {
    let value = match header.map(str::trim_start) {
        Some(value) if !value.trim_end().is_empty() => value,
        _ => return Err(TokenError::Missing),
    };

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(TokenError::Malformed)?
        .trim();

    if token.is_empty() {
        return Err(TokenError::Missing);
    }

    Ok(token)
}
