//! Core library for the city weather lookup.
//!
//! This crate defines:
//! - The backend-for-frontend lookup service and its upstream provider
//! - Normalization of provider JSON into a flat payload
//! - Configuration (server environment, client config file)
//! - The client view shared by front ends: submit flow and display derivations
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod render;
pub mod service;
pub mod view;

pub use config::{ClientConfig, ProviderSettings, ServerConfig};
pub use error::WeatherError;
pub use model::{ErrorBody, WeatherPayload, WeatherQuery};
pub use provider::{WeatherProvider, provider_from_settings};
pub use render::{Palette, Theme};
pub use service::WeatherService;
pub use view::{HandlerClient, HttpHandlerClient, ViewState};
