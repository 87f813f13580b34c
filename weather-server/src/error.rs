//! Conversion of lookup failures into `{ "error": ... }` responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use weather_core::{ErrorBody, WeatherError};

#[derive(Debug)]
pub struct AppError(pub WeatherError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::new(self.0.to_string()))).into_response()
    }
}

impl From<WeatherError> for AppError {
    fn from(err: WeatherError) -> Self {
        AppError(err)
    }
}
