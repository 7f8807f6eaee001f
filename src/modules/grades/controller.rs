use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{CreateGradeDto, Grade, MessageResponse};

use super::service::GradeService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Record a grade for a student
#[utoipa::path(
    post,
    path = "/api/teacher/grade",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade created", body = Grade),
        (status = 400, description = "Validation error or unknown student/subject", body = MessageResponse),
        (status = 403, description = "Caller is not staff", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn add_grade(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = GradeService::create_grade(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}
