use thiserror::Error;

pub const MISSING_CITY: &str = "City is required.";
pub const UPSTREAM_FALLBACK: &str = "Failed to fetch weather.";
pub const UNEXPECTED: &str = "Unexpected server error fetching weather.";

/// Every way a lookup can fail, each carrying the status the handler answers with.
///
/// `Display` is the message shown to the caller. Internal detail of
/// [`WeatherError::Unexpected`] is only reachable through `source()`.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City is required.")]
    MissingCity,

    #[error("Missing {var} in server environment.")]
    MissingApiKey { var: &'static str },

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Unexpected server error fetching weather.")]
    Unexpected(#[source] anyhow::Error),
}

impl WeatherError {
    pub fn status(&self) -> u16 {
        match self {
            WeatherError::MissingCity => 400,
            WeatherError::MissingApiKey { .. } => 500,
            WeatherError::Upstream { status, .. } => *status,
            WeatherError::Unexpected(_) => 500,
        }
    }
}

impl From<anyhow::Error> for WeatherError {
    fn from(err: anyhow::Error) -> Self {
        WeatherError::Unexpected(err)
    }
}
