use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use mercury_config::LogConfig;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "mercury.json";

/// Keeps the background file writer alive. Drop it only at shutdown so that
/// buffered lines are flushed.
pub struct TracingGuard {
    _file: Option<WorkerGuard>,
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mercury={level},mercury_db={level},mercury_observability={level},tower_http=warn,hyper=warn,sqlx=warn"
        ))
    })
}

/// Installs the global subscriber.
///
/// The console layer is filtered by `RUST_LOG`, falling back to `LOG_LEVEL`.
/// When a log directory is configured, info-level JSON lines also go to a
/// daily rolling file there. A directory that cannot be created disables file
/// output with a warning instead of failing startup.
pub fn init_tracing(config: &LogConfig) -> TracingGuard {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(env_filter(&config.level));

    let mut dir_error = None;
    let (json_layer, guard) = match config.dir.as_deref() {
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info"));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                dir_error = Some((dir.to_string(), e));
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    if let Some((dir, e)) = dir_error {
        warn!(dir = %dir, error = %e, "Could not create log directory; file logging disabled");
    }

    TracingGuard { _file: guard }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status();

    match status_class(status) {
        StatusClass::Server => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Server error"
        ),
        StatusClass::Client => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Client error"
        ),
        StatusClass::Ok => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Request completed"
        ),
    }

    response
}

#[derive(Debug, PartialEq, Eq)]
enum StatusClass {
    Ok,
    Client,
    Server,
}

fn status_class(status: StatusCode) -> StatusClass {
    if status.is_server_error() {
        StatusClass::Server
    } else if status.is_client_error() {
        StatusClass::Client
    } else {
        StatusClass::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusCode::NO_CONTENT), StatusClass::Ok);
        assert_eq!(status_class(StatusCode::FORBIDDEN), StatusClass::Client);
        assert_eq!(status_class(StatusCode::BAD_GATEWAY), StatusClass::Server);
    }

    #[tokio::test]
    async fn test_middleware_passes_response_through() {
        let app = Router::new()
            .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }))
            .layer(middleware::from_fn(logging_middleware));

        let response = app
            .oneshot(Request::builder().uri("/teapot").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
