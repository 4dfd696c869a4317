use anyhow::Context;
use fare_engine::{app, config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fare_engine=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let fares = config.fare_service()?;

    tracing::info!(
        "Surcharge windows evaluated at UTC{:+} with {} extra holiday(s)",
        config.utc_offset_hours,
        config.extra_holidays.len()
    );

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Fare engine listening on http://{}", bind_address);

    axum::serve(listener, app(AppState::new(fares)))
        .await
        .context("Server error")?;

    Ok(())
}
