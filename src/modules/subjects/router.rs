use axum::{Router, routing::post};

use super::controller::{add_student_subject, create_subject};
use crate::state::AppState;

pub fn init_admin_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/subject", post(create_subject))
        .route("/student-subject", post(add_student_subject))
}
