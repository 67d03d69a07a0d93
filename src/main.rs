//! Cafe & Wifi server binary.

use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cafe_wifi::config::AppConfig;
use cafe_wifi::context::AppContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let addr = config.server.socket_addr()?;
    let context = AppContext::initialize(config).await?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "cafe-wifi listening");

    axum::serve(listener, context.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    context.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
