//! Request guards and the caller identity extractor.
//!
//! - [`auth`]: token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: admin, teacher and student guards
//!
//! Guards are mounted with `axum::middleware::from_fn_with_state`:
//!
//! ```ignore
//! Router::new()
//!     .route("/register", post(register))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//! ```

pub mod auth;
pub mod role;
