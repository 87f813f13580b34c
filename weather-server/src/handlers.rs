use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use weather_core::WeatherPayload;

use crate::{error::AppError, router::AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /api/weather
///
/// Takes the raw body so malformed JSON reaches validation as a missing city
/// instead of being rejected by the extractor.
pub async fn lookup_weather(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WeatherPayload>, AppError> {
    let payload = state.service.lookup(&body).await?;
    Ok(Json(payload))
}
