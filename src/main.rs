//! Rerank HTTP server entrypoint.

use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use rerank::config::Config;
use rerank::constants::DEFAULT_PORT;
use rerank::gateway::{HandlerState, create_router_with_state};
use rerank::model::{CrossEncoder, Scorer};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr = config.socket_addr();

    let encoder_config = config.cross_encoder_config();
    tracing::info!(
        model = %encoder_config.model_id,
        path = %encoder_config.model_path.display(),
        "Loading cross-encoder model"
    );
    let encoder = CrossEncoder::load(encoder_config)?;
    tracing::info!(device = encoder.device_name(), "Model loaded successfully");

    let state = HandlerState::new(Arc::new(encoder), config.max_batch_size);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %addr,
        max_batch_size = ?config.max_batch_size,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Rerank service shutdown complete");
    Ok(())
}

/// Requests `/healthz` on the local port; exit code for container health checks.
async fn run_health_check() -> i32 {
    let port = Config::from_env()
        .map(|config| config.port)
        .unwrap_or(DEFAULT_PORT);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
