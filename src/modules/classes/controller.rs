use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{
    Class, ClassMember, ClassMemberInfo, ClassQuery, CreateClassDto, CreateClassMemberDto,
    MessageResponse,
};

use super::service::ClassService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Create a class
#[utoipa::path(
    post,
    path = "/api/admin/class",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 409, description = "Class already exists", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// Add an account to a class
#[utoipa::path(
    post,
    path = "/api/admin/class-member",
    request_body = CreateClassMemberDto,
    responses(
        (status = 201, description = "Member added", body = ClassMember),
        (status = 400, description = "Unknown account or class", body = MessageResponse),
        (status = 409, description = "Already a member", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn add_class_member(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassMemberDto>,
) -> Result<(StatusCode, Json<ClassMember>), AppError> {
    let member = ClassService::add_member(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// List the members of a class
#[utoipa::path(
    get,
    path = "/api/teacher/class",
    params(ClassQuery),
    responses(
        (status = 200, description = "Class members", body = Vec<ClassMemberInfo>),
        (status = 404, description = "Class not found", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn get_class(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ClassQuery>,
) -> Result<Json<Vec<ClassMemberInfo>>, AppError> {
    let members = ClassService::list_members(&state.db, &query.class_name).await?;
    Ok(Json(members))
}
