//! # Mercury Auth
//!
//! Identity primitives for the Mercury API.
//!
//! - [`role`]: the three account roles (`admin`, `teacher`, `student`)
//! - [`claims`]: the JWT claim set `{email, role, iat, exp}`
//! - [`jwt`]: token issuance and verification
//!
//! Tokens are HS256-signed with the secret from [`mercury_config::JwtConfig`]
//! and expire exactly [`TOKEN_TTL_SECS`] (seven days) after issuance. They are
//! sent by clients as `Authorization: Bearer <token>`.
//!
//! # Example
//!
//! ```ignore
//! use mercury_auth::{Role, create_token, verify_token};
//!
//! let token = create_token("a@x.com", Role::Teacher, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! assert_eq!(claims.role, Role::Teacher);
//! ```

pub mod claims;
pub mod jwt;
pub mod role;

pub use claims::Claims;
pub use jwt::{
    TOKEN_TTL_SECS, TokenError, bearer_token, create_token, create_token_at, decode_token,
    verify_token,
};
pub use role::{Role, RoleParseError};
