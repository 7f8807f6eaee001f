use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{
    ChangePasswordRequest, MessageResponse, RegisterRequest, RegisterResponse, UserInfo,
};

use super::service::AccountService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account with its profile
#[utoipa::path(
    post,
    path = "/api/admin/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Missing fields or unknown keys", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 409, description = "Email already taken", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user_id = AccountService::register(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

/// Change the caller's password
#[utoipa::path(
    put,
    path = "/api/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Empty password", body = MessageResponse),
        (status = 401, description = "Bad token or incorrect old password", body = MessageResponse),
        (status = 404, description = "Account not found", body = MessageResponse),
        (status = 409, description = "Password changed concurrently", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state, auth_user, dto), fields(email = %auth_user.email()))]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AccountService::change_password(&state.db, auth_user.email(), dto).await?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// Delete the caller's account and profile
#[utoipa::path(
    delete,
    path = "/api/delete-account",
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 404, description = "Account not found", body = MessageResponse),
        (status = 409, description = "Account still referenced by school records", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state, auth_user), fields(email = %auth_user.email()))]
pub async fn delete_account(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    AccountService::delete_account(&state.db, auth_user.email()).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Get the caller's account and profile
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Account and profile", body = UserInfo),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 404, description = "Account not found", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserInfo>, AppError> {
    let info = AccountService::user_info(&state.db, auth_user.email()).await?;
    Ok(Json(info))
}
