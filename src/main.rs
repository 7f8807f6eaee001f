use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info};

use mercury::modules::accounts::service::AccountService;
use mercury::router::init_router;
use mercury::state::AppState;
use mercury_config::AppConfig;
use mercury_db::init_and_migrate;
use mercury_observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let _tracing_guard = init_tracing(&config.logging);

    let pool = init_and_migrate(&config.database)
        .await
        .context("Failed to open database")?;

    match AccountService::ensure_admin(&pool, &config.admin).await {
        Ok(true) => info!(email = %config.admin.email, "Created initial admin account"),
        Ok(false) => info!("Initial admin account already present"),
        Err(e) => {
            error!(error = %e, "Failed to create initial admin account");
            return Err(anyhow::anyhow!("Failed to create initial admin account"));
        }
    }

    let state = AppState::new(pool.clone(), config.jwt.clone(), config.cors.clone());
    let app = init_router(state);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server running");
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
