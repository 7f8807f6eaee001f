use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use mercury_auth::{Claims, Role, TokenError, bearer_token, decode_token};
use mercury_config::JwtConfig;
use mercury_core::AppError;

use crate::state::AppState;

/// Identity of the caller, established from a verified token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Verifies the bearer token carried by `headers`.
pub fn authenticate_headers(
    headers: &HeaderMap,
    jwt_config: &JwtConfig,
) -> Result<AuthUser, AppError> {
    let verified = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| TokenError::Malformed))
        .transpose()
        .and_then(bearer_token)
        .and_then(|token| decode_token(token, jwt_config));

    match verified {
        Ok(claims) => Ok(AuthUser(claims)),
        Err(e) => {
            warn!(reason = %e, "Rejected request token");
            Err(e.into_app_error())
        }
    }
}

/// Reads the identity attached by a guard, or verifies the header itself on
/// routes mounted without one.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate_headers(&parts.headers, &state.jwt_config)
    }
}

/// Rejects the request with 401 unless it carries a valid token.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match authenticate_headers(req.headers(), &state.jwt_config) {
        Ok(auth_user) => {
            req.extensions_mut().insert(auth_user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
