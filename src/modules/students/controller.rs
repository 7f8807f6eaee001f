use axum::{Json, extract::State};

use mercury_core::AppError;
use mercury_models::{Attendance, Grade, MessageResponse, StudentInfo, StudentQuery, Subject};

use super::service::StudentService;
use crate::middleware::auth::AuthUser;
use crate::modules::attendance::service::AttendanceService;
use crate::modules::grades::service::GradeService;
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// Grades of one student
#[utoipa::path(
    get,
    path = "/api/teacher/student-grades",
    params(StudentQuery),
    responses(
        (status = 200, description = "Grades", body = Vec<Grade>),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_student_grades(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StudentQuery>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let account = StudentService::require_account(&state.db, query.user_id).await?;
    let grades = GradeService::list_for_student(&state.db, account.uid).await?;
    Ok(Json(grades))
}

/// Attendance of one student
#[utoipa::path(
    get,
    path = "/api/teacher/student-attendance",
    params(StudentQuery),
    responses(
        (status = 200, description = "Attendance records", body = Vec<Attendance>),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_student_attendance(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StudentQuery>,
) -> Result<Json<Vec<Attendance>>, AppError> {
    let account = StudentService::require_account(&state.db, query.user_id).await?;
    let records = AttendanceService::list_for_student(&state.db, account.uid).await?;
    Ok(Json(records))
}

/// Account, profile and classes of one student
#[utoipa::path(
    get,
    path = "/api/teacher/student-info",
    params(StudentQuery),
    responses(
        (status = 200, description = "Student information", body = StudentInfo),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_student_info(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StudentQuery>,
) -> Result<Json<StudentInfo>, AppError> {
    let info = StudentService::info(&state.db, query.user_id).await?;
    Ok(Json(info))
}

/// The caller's own grades
#[utoipa::path(
    get,
    path = "/api/student/grades",
    responses(
        (status = 200, description = "Grades", body = Vec<Grade>),
        (status = 403, description = "Caller is not a student", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_own_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Grade>>, AppError> {
    let user_id = StudentService::account_id_for(&state.db, auth_user.email()).await?;
    let grades = GradeService::list_for_student(&state.db, user_id).await?;
    Ok(Json(grades))
}

/// The caller's own subjects
#[utoipa::path(
    get,
    path = "/api/student/subjects",
    responses(
        (status = 200, description = "Subjects", body = Vec<Subject>),
        (status = 403, description = "Caller is not a student", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_own_subjects(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Subject>>, AppError> {
    let user_id = StudentService::account_id_for(&state.db, auth_user.email()).await?;
    let subjects = SubjectService::list_for_student(&state.db, user_id).await?;
    Ok(Json(subjects))
}

/// The caller's own attendance
#[utoipa::path(
    get,
    path = "/api/student/attendance",
    responses(
        (status = 200, description = "Attendance records", body = Vec<Attendance>),
        (status = 403, description = "Caller is not a student", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_own_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Attendance>>, AppError> {
    let user_id = StudentService::account_id_for(&state.db, auth_user.email()).await?;
    let records = AttendanceService::list_for_student(&state.db, user_id).await?;
    Ok(Json(records))
}
