use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WeatherError;

/// A city lookup as received by the handler. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Build a query from a raw request body.
    ///
    /// A missing body, invalid JSON or a non-string `city` are all treated as
    /// a missing city rather than as a parse error.
    pub fn from_body(body: &[u8]) -> Result<Self, WeatherError> {
        let city = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("city").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_default();

        Self::new(&city)
    }

    pub fn new(city: &str) -> Result<Self, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::MissingCity);
        }

        Ok(Self { city: city.to_string() })
    }
}

/// Normalized current conditions handed to the client view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPayload {
    pub city: String,
    pub country: String,
    pub temp_c: i64,
    pub feels_c: i64,
    pub condition: String,
    pub description: String,
    pub icon: String,
    pub humidity: i64,
    pub wind_kmh: i64,
    pub sunrise: i64,
    pub sunset: i64,
    /// UTC offset of the location, in seconds.
    pub timezone: i64,
    pub dt: i64,
}

/// `{ "error": "..." }` body returned by the handler on every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
