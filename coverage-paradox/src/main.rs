use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use coverage_paradox::config::ServerConfig;
use coverage_paradox::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coverage_paradox=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::default());

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Coverage paradox model listening on http://{}", config.bind_addr);
    info!("  GET  /health         - Health check");
    info!("  GET  /defaults       - Default line parameters");
    info!("  POST /sweep          - Journey times for every station count");
    info!("  POST /sweep/optimum  - Best station count only");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
