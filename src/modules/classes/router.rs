use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_class_member, create_class, get_class};
use crate::state::AppState;

pub fn init_admin_classes_router() -> Router<AppState> {
    Router::new()
        .route("/class", post(create_class))
        .route("/class-member", post(add_class_member))
}

pub fn init_staff_classes_router() -> Router<AppState> {
    Router::new().route("/class", get(get_class))
}
