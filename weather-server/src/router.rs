use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::{any::Any, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use weather_core::{ErrorBody, WeatherService, error::UNEXPECTED};

use crate::handlers;

pub const WEATHER_PATH: &str = "/api/weather";

#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(service: WeatherService) -> Self {
        Self { service: Arc::new(service) }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(WEATHER_PATH, post(handlers::lookup_weather))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("weather handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(UNEXPECTED))).into_response()
}
