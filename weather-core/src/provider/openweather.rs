use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{
    error::{UPSTREAM_FALLBACK, WeatherError},
    model::{WeatherPayload, WeatherQuery},
    normalize::normalize,
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    fn current_url(&self) -> String {
        format!("{}{CURRENT_WEATHER_PATH}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_city(&self, query: &WeatherQuery) -> Result<WeatherPayload, WeatherError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            tracing::debug!(%status, body = %truncate_body(&body), "OpenWeather rejected request");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let doc: Value =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        Ok(normalize(&query.city, &doc, Utc::now().timestamp()))
    }
}

/// The provider's own `message`, or the generic fallback when the body has none.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UPSTREAM_FALLBACK.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
