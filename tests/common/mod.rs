#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use mercury::modules::accounts::service::AccountService;
use mercury::router::init_router;
use mercury::state::AppState;
use mercury_auth::{Role, create_token};
use mercury_config::{CorsConfig, JwtConfig};
use mercury_db::MIGRATOR;
use mercury_models::{AccountId, NewProfile};

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub struct TestUser {
    pub id: AccountId,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A migrated in-memory database. One connection, never recycled, so every
/// query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState::new(
        pool,
        jwt_config(),
        CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    );
    init_router(state)
}

pub fn generate_unique_email() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    format!("user-{}@school.test", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Creates an account with a fake profile through the normal transactional path.
pub async fn create_test_user(pool: &SqlitePool, role: Role) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let profile = NewProfile {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        ..Default::default()
    };

    let id = AccountService::create_account(pool, &email, &password, role, &profile)
        .await
        .unwrap();

    TestUser {
        id,
        email,
        password,
        role,
    }
}

pub fn token_for(user: &TestUser) -> String {
    create_token(&user.email, user.role, &jwt_config()).unwrap()
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Sends a request and returns the status and the JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
