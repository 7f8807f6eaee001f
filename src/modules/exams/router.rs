use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_exam, get_exams};
use crate::state::AppState;

pub fn init_exams_router() -> Router<AppState> {
    Router::new().route("/exams", get(get_exams))
}

pub fn init_staff_exams_router() -> Router<AppState> {
    Router::new().route("/exam", post(add_exam))
}
