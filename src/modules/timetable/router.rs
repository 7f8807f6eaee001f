use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_timetable_entry, get_timetable};
use crate::state::AppState;

pub fn init_timetable_router() -> Router<AppState> {
    Router::new().route("/timetable", get(get_timetable))
}

pub fn init_admin_timetable_router() -> Router<AppState> {
    Router::new().route("/timetable", post(add_timetable_entry))
}
