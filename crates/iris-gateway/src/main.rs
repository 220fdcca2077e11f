//! iris gateway
//!
//! Serves a pre-trained iris classifier over HTTP:
//! - `/predict` inference, `/ui` form, `/dashboard` live view
//! - `/stats`, `/metrics`, `/health` reporting from in-memory counters
//! - Starts without a model (degraded) when the artifact cannot be loaded

use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use iris_core::error::Result;
use iris_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg_path = config::config_path();
    let cfg = config::load_or_default(&cfg_path)?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.gateway.log_level)),
        )
        .init();

    if Path::new(&cfg_path).exists() {
        tracing::info!(path = %cfg_path, "config loaded");
    } else {
        tracing::info!(path = %cfg_path, "config file not found, using defaults");
    }

    let state = app_state::AppState::new(cfg)?;
    let listen = state.cfg().gateway.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, "iris-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| iris_core::IrisError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| iris_core::IrisError::Internal(format!("server failed: {e}")))?;

    tracing::info!("iris-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("shutdown signal received");
}
