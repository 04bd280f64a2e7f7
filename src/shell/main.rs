use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use recipes_api::config::{AppConfig, HostMode};
use recipes_api::shell::app_cell::AppCell;
use recipes_api::shell::factory::create_app;
use recipes_api::shell::platform::azure::{AzureFunctionsAdapter, host_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let addr = SocketAddr::new(config.host, config.port);

    let app = match config.mode {
        HostMode::Standalone => create_app(&config).await?.router(),
        // Built on the first invocation, not here.
        HostMode::AzureFunctions => host_router(
            AzureFunctionsAdapter::default(),
            AppCell::new(config.clone()),
            &config.function_name,
        ),
    };

    info!(%addr, mode = ?config.mode, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl-c");
    }
}
