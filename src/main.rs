use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shift_earnings::api::{AppState, create_router};
use shift_earnings::config::{ConfigLoader, ServerSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_earnings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env();
    let config = ConfigLoader::load(&settings.config_path)?;
    tracing::info!(
        version = %settings.version,
        config = %settings.config_path.display(),
        "Starting shift earnings engine"
    );

    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;
    tracing::info!("HTTP server listening on {}", settings.addr);

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
