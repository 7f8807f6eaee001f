use axum::{Router, routing::post};

use super::controller::add_grade;
use crate::state::AppState;

pub fn init_staff_grades_router() -> Router<AppState> {
    Router::new().route("/grade", post(add_grade))
}
