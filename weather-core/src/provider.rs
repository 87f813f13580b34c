use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    config::{API_KEY_VAR, ProviderSettings},
    error::WeatherError,
    model::{WeatherPayload, WeatherQuery},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city, already normalized.
    async fn current_by_city(&self, query: &WeatherQuery) -> Result<WeatherPayload, WeatherError>;
}

/// Construct the provider from settings, failing when no API key is configured.
pub fn provider_from_settings(
    settings: &ProviderSettings,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = settings
        .api_key
        .as_deref()
        .ok_or(WeatherError::MissingApiKey { var: API_KEY_VAR })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned(), settings.base_url.clone())))
}
