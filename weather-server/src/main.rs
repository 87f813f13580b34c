//! Weather handler server.
//!
//! # Environment Variables
//!
//! - `OPENWEATHER_API_KEY`: provider credential, checked on every request
//! - `OPENWEATHER_BASE_URL`: provider base URL (default: https://api.openweathermap.org)
//! - `WEATHER_BIND`: listen address (default: 127.0.0.1:3000)
//! - `RUST_LOG`: log filter (default: info)

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use weather_core::{ServerConfig, WeatherService, config::API_KEY_VAR};
use weather_server::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    if config.provider.api_key.is_none() {
        warn!("{API_KEY_VAR} is not set; lookups will fail until it is configured");
    }

    let app = create_router(AppState::new(WeatherService::new(config.provider)));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!("Weather handler listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
