use axum::{Router, routing::post};

use super::controller::add_attendance;
use crate::state::AppState;

pub fn init_staff_attendance_router() -> Router<AppState> {
    Router::new().route("/attendance", post(add_attendance))
}
