//! Reshaping of the provider's current-weather JSON into a [`WeatherPayload`].
//!
//! The provider document is read as loose JSON: any numeric field that is
//! missing or not a number becomes `0`, so the payload never has holes.

use serde_json::Value;

use crate::model::WeatherPayload;

/// Icon code used when the provider does not send one.
pub const PLACEHOLDER_ICON: &str = "01d";

const MPS_TO_KMH: f64 = 3.6;

pub fn normalize(query_city: &str, doc: &Value, now: i64) -> WeatherPayload {
    let weather = doc.pointer("/weather/0");
    let weather_str = |key: &str| {
        weather
            .and_then(|w| w.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let city = doc
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(query_city)
        .to_string();

    let icon = Some(weather_str("icon"))
        .filter(|icon| !icon.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_ICON.to_string());

    WeatherPayload {
        city,
        country: str_at(doc, "/sys/country"),
        temp_c: round_half_up(number_at(doc, "/main/temp")),
        feels_c: round_half_up(number_at(doc, "/main/feels_like")),
        condition: weather_str("main"),
        description: weather_str("description"),
        icon,
        humidity: round_half_up(number_at(doc, "/main/humidity")),
        wind_kmh: round_half_up(number_at(doc, "/wind/speed") * MPS_TO_KMH),
        sunrise: round_half_up(number_at(doc, "/sys/sunrise")),
        sunset: round_half_up(number_at(doc, "/sys/sunset")),
        timezone: round_half_up(number_at(doc, "/timezone")),
        dt: doc.pointer("/dt").and_then(coerce).map_or(now, round_half_up),
    }
}

fn str_at(doc: &Value, pointer: &str) -> String {
    doc.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn number_at(doc: &Value, pointer: &str) -> f64 {
    doc.pointer(pointer).and_then(coerce).unwrap_or(0.0)
}

/// Numbers pass through, numeric strings are parsed, everything else is rejected.
fn coerce(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    n.is_finite().then_some(n)
}

/// Halves round towards positive infinity: `2.5 -> 3`, `-2.5 -> -2`.
pub fn round_half_up(n: f64) -> i64 {
    (n + 0.5).floor() as i64
}
