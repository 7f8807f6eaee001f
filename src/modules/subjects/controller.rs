use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{CreateStudentSubjectDto, CreateSubjectDto, MessageResponse, Subject};

use super::service::SubjectService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a subject for a class and assign its teacher
#[utoipa::path(
    post,
    path = "/api/admin/subject",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 400, description = "Validation error or unknown class/teacher", body = MessageResponse),
        (status = 409, description = "Subject already exists", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// Enrol a student in a subject
#[utoipa::path(
    post,
    path = "/api/admin/student-subject",
    request_body = CreateStudentSubjectDto,
    responses(
        (status = 201, description = "Student enrolled", body = MessageResponse),
        (status = 400, description = "Unknown student or subject", body = MessageResponse),
        (status = 409, description = "Already enrolled", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn add_student_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentSubjectDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    SubjectService::enrol_student(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student enrolled successfully")),
    ))
}
