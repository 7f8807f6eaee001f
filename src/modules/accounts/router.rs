use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{change_password, delete_account, get_user, register};
use crate::state::AppState;

/// Routes for any authenticated caller.
pub fn init_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/change-password", put(change_password))
        .route("/delete-account", delete(delete_account))
        .route("/user", get(get_user))
}

pub fn init_admin_accounts_router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}
