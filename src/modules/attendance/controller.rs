use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{Attendance, CreateAttendanceDto, MessageResponse};

use super::service::AttendanceService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Record attendance for a student
#[utoipa::path(
    post,
    path = "/api/teacher/attendance",
    request_body = CreateAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = Attendance),
        (status = 400, description = "Validation error or unknown student/subject", body = MessageResponse),
        (status = 403, description = "Caller is not staff", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn add_attendance(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAttendanceDto>,
) -> Result<(StatusCode, Json<Attendance>), AppError> {
    let record = AttendanceService::record(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
