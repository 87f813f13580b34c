//! Backend-for-frontend lookup: validate the city, attach the server-held
//! credential, call the provider and hand back a normalized payload.

use crate::{
    config::ProviderSettings,
    error::WeatherError,
    model::{WeatherPayload, WeatherQuery},
    provider::provider_from_settings,
};

#[derive(Debug, Clone)]
pub struct WeatherService {
    settings: ProviderSettings,
}

impl WeatherService {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }

    /// Run one lookup from a raw request body.
    pub async fn lookup(&self, body: &[u8]) -> Result<WeatherPayload, WeatherError> {
        let result = self.lookup_inner(body).await;

        match &result {
            Ok(payload) => {
                tracing::info!(city = %payload.city, country = %payload.country, "weather lookup succeeded")
            }
            Err(err @ WeatherError::MissingCity) => tracing::warn!(error = %err, "rejected lookup"),
            Err(err @ WeatherError::MissingApiKey { var }) => {
                tracing::error!(error = %err, var, "provider credential is not configured")
            }
            Err(err @ WeatherError::Upstream { status, .. }) => {
                tracing::warn!(status, error = %err, "provider rejected lookup")
            }
            Err(WeatherError::Unexpected(source)) => {
                tracing::error!(error = ?source, "unexpected failure fetching weather")
            }
        }

        result
    }

    async fn lookup_inner(&self, body: &[u8]) -> Result<WeatherPayload, WeatherError> {
        let query = WeatherQuery::from_body(body)?;
        // A missing key fails this request only; the server keeps running.
        let provider = provider_from_settings(&self.settings)?;

        provider.current_by_city(&query).await
    }
}
