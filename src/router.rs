use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use mercury_config::CorsConfig;
use mercury_observability::logging_middleware;

use crate::docs::ApiDoc;
use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_admin, require_student, require_teacher};
use crate::modules::accounts::router::{init_accounts_router, init_admin_accounts_router};
use crate::modules::attendance::router::init_staff_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::{init_admin_classes_router, init_staff_classes_router};
use crate::modules::exams::router::{init_exams_router, init_staff_exams_router};
use crate::modules::grades::router::init_staff_grades_router;
use crate::modules::health::controller::ping;
use crate::modules::lucky_number::controller::get_lucky_number;
use crate::modules::students::router::{init_staff_students_router, init_student_router};
use crate::modules::subjects::router::init_admin_subjects_router;
use crate::modules::timetable::router::{init_admin_timetable_router, init_timetable_router};
use crate::state::AppState;

/// Routes shared by admins and teachers. Mounted once under each prefix.
fn init_staff_router() -> Router<AppState> {
    Router::new()
        .merge(init_staff_grades_router())
        .merge(init_staff_attendance_router())
        .merge(init_staff_exams_router())
        .merge(init_staff_classes_router())
        .merge(init_staff_students_router())
}

fn init_api_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .merge(init_auth_router())
        .route("/ping", get(ping))
        .route("/lucky-number", get(get_lucky_number));

    let authenticated = Router::new()
        .merge(init_accounts_router())
        .merge(init_timetable_router())
        .merge(init_exams_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let admin = Router::new()
        .merge(init_admin_accounts_router())
        .merge(init_admin_timetable_router())
        .merge(init_admin_classes_router())
        .merge(init_admin_subjects_router())
        .merge(init_staff_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let teacher = init_staff_router()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher));

    let student = init_student_router()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_student));

    public
        .merge(authenticated)
        .nest("/admin", admin)
        .nest("/teacher", teacher)
        .nest("/student", student)
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    // A wildcard origin cannot be combined with credentials.
    if config.allows_any_origin() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer
        .allow_origin(allowed_origins)
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .nest("/api", init_api_router(&state))
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}
