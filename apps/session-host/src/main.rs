//! # Plume Session Host
//!
//! Headless owner of a scheduling session: wires the post engine to
//! durable storage and drives the once-per-second publish sweep until
//! shutdown.

use chrono::Utc;

mod background;
mod config;
mod state;

use background::{Ticker, TickerConfig};
use config::HostConfig;
use state::SessionState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = HostConfig::from_env();

    tracing::info!(
        data_dir = %config.data_dir.display(),
        tick_ms = config.tick_interval.as_millis() as u64,
        "Starting Plume session host"
    );

    // Build session state (runs the initial load from storage)
    let session = SessionState::new(&config).await;

    // Register and start the publish ticker
    let mut ticker = Ticker::new(TickerConfig::from(&config)).await?;

    let engine = session.engine.clone();
    ticker
        .add_repeated(config.tick_interval, move || {
            let engine = engine.clone();
            async move {
                let now = Utc::now();
                engine.lock().await.tick(now).await;
            }
        })
        .await?;

    ticker.start().await?;

    // Run until interrupted; the ticker is shut down on every exit
    // path so no timer outlives the session.
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }

    ticker.shutdown().await?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,session_host=debug,plume_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
