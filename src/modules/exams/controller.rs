use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{CreateExamDto, Exam, ExamQuery, MessageResponse};

use super::service::ExamService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Schedule an exam, test or quiz
#[utoipa::path(
    post,
    path = "/api/teacher/exam",
    request_body = CreateExamDto,
    responses(
        (status = 201, description = "Exam created", body = Exam),
        (status = 400, description = "Validation error or unknown references", body = MessageResponse),
        (status = 403, description = "Caller is not staff", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn add_exam(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateExamDto>,
) -> Result<(StatusCode, Json<Exam>), AppError> {
    let exam = ExamService::create_exam(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(exam)))
}

/// List exams
#[utoipa::path(
    get,
    path = "/api/exams",
    params(ExamQuery),
    responses(
        (status = 200, description = "Exams", body = Vec<Exam>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exams"
)]
pub async fn get_exams(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ExamQuery>,
) -> Result<Json<Vec<Exam>>, AppError> {
    let exams = ExamService::list(&state.db, query.class_name.as_deref()).await?;
    Ok(Json(exams))
}
