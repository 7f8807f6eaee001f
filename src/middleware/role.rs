//! Role guards.
//!
//! A guard authenticates the request, compares the token's role with the
//! required one, then re-reads the role from the store. A role changed or an
//! account removed after the token was issued is therefore honoured
//! immediately. Roles match exactly: an admin token does not pass the
//! teacher guard.

use anyhow::Context;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use mercury_auth::Role;
use mercury_core::AppError;
use mercury_db::accounts;

use crate::middleware::auth::{AuthUser, authenticate_headers};
use crate::state::AppState;

const FORBIDDEN: &str = "Forbidden";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Checks `auth_user` against `required`, consulting the store last.
pub async fn authorize(
    state: &AppState,
    auth_user: &AuthUser,
    required: Role,
) -> Result<(), AppError> {
    if auth_user.role() != required {
        warn!(email = %auth_user.email(), role = %auth_user.role(), required = %required, "Token role rejected");
        return Err(AppError::forbidden(FORBIDDEN.to_string()));
    }

    let stored = accounts::find_role_by_email(&state.db, auth_user.email())
        .await
        .context("Failed to read account role")
        .map_err(AppError::database)?;

    match stored {
        None => {
            warn!(email = %auth_user.email(), "Token for unknown account");
            Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()))
        }
        Some(role) if role != required => {
            warn!(email = %auth_user.email(), stored = %role, required = %required, "Stored role rejected");
            Err(AppError::forbidden(FORBIDDEN.to_string()))
        }
        Some(_) => Ok(()),
    }
}

pub async fn require_role(
    state: &AppState,
    mut req: Request,
    next: Next,
    required: Role,
) -> Result<Response, AppError> {
    let auth_user = authenticate_headers(req.headers(), &state.jwt_config)?;
    authorize(state, &auth_user, required).await?;

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(&state, req, next, Role::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(&state, req, next, Role::Teacher).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(&state, req, next, Role::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
