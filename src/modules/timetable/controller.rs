use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use mercury_core::AppError;
use mercury_models::{CreateTimetableEntryDto, MessageResponse, TimetableEntry, TimetableQuery};

use super::service::TimetableService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Add a timetable entry
#[utoipa::path(
    post,
    path = "/api/admin/timetable",
    request_body = CreateTimetableEntryDto,
    responses(
        (status = 201, description = "Entry created", body = TimetableEntry),
        (status = 400, description = "Missing fields, bad times or unknown references", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Timetable"
)]
#[instrument(skip(state))]
pub async fn add_timetable_entry(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTimetableEntryDto>,
) -> Result<(StatusCode, Json<TimetableEntry>), AppError> {
    let entry = TimetableService::create_entry(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// List timetable entries
#[utoipa::path(
    get,
    path = "/api/timetable",
    params(TimetableQuery),
    responses(
        (status = 200, description = "Timetable entries", body = Vec<TimetableEntry>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Timetable"
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TimetableQuery>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let entries = TimetableService::list(&state.db, query.class_name.as_deref()).await?;
    Ok(Json(entries))
}
