//! 시그널 엔진 HTTP 서버.
//!
//! ```bash
//! pulse-api                          # config/default.toml + PULSE__* 환경 변수
//! PULSE__SERVER__PORT=8080 pulse-api
//! curl http://localhost:5000/predict/AAPL
//! ```

use std::sync::Arc;

use anyhow::Context;
use pulse_api::{create_router, AppState};
use pulse_core::{init_logging, AppConfig, LogConfig};
use pulse_data::{Lookback, YahooChartClient};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일은 선택 사항
    let _ = dotenvy::dotenv();

    let config_path = std::env::var("PULSE_CONFIG").ok();
    let config = AppConfig::load(config_path.as_deref().map(std::path::Path::new))
        .context("Failed to load configuration")?;

    init_logging(LogConfig::from_settings(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let client = YahooChartClient::new(&config.data).context("Failed to build HTTP client")?;
    let state = Arc::new(AppState::new(
        Arc::new(client),
        Lookback::from_config(&config.data),
        &config.server,
    ));

    info!(
        version = %state.version,
        range = %config.data.range,
        interval = %config.data.interval,
        predict_timeout_secs = config.server.predict_timeout_secs,
        "Application state initialized"
    );

    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "API server listening");
    info!("Prediction: GET http://{}/predict/AAPL", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Graceful shutdown 시그널 대기 (Ctrl+C 또는 SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
