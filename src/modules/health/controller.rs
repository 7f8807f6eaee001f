use axum::http::StatusCode;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/ping",
    responses((status = 204, description = "Service is up")),
    tag = "Misc"
)]
pub async fn ping() -> StatusCode {
    StatusCode::NO_CONTENT
}
