use axum::{Json, extract::State};

use super::model::LuckyNumberResponse;
use crate::state::AppState;

/// Today's lucky number
#[utoipa::path(
    get,
    path = "/api/lucky-number",
    responses(
        (status = 200, description = "Lucky number of the day", body = LuckyNumberResponse)
    ),
    tag = "Misc"
)]
pub async fn get_lucky_number(State(state): State<AppState>) -> Json<LuckyNumberResponse> {
    Json(LuckyNumberResponse {
        number: state.lucky_number.today(),
    })
}
