//! Client-side view state and the submit flow shared by every front end.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::fmt::Debug;

use crate::{
    error::UPSTREAM_FALLBACK,
    model::{ErrorBody, WeatherPayload},
};

pub const EMPTY_CITY: &str = "Please enter a city name.";
pub const CITY_NOT_FOUND: &str = "City not found. Please check the spelling and try again.";
pub const GENERIC_FAULT: &str = "Unexpected error. Please try again.";

/// Raw answer from the weather handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerReply {
    pub status: u16,
    pub body: String,
}

impl HandlerReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the weather handler.
#[async_trait]
pub trait HandlerClient: Send + Sync + Debug {
    async fn post_city(&self, city: &str) -> anyhow::Result<HandlerReply>;
}

#[derive(Debug, Clone)]
pub struct HttpHandlerClient {
    endpoint: String,
    http: Client,
}

impl HttpHandlerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), http: Client::new() }
    }
}

#[async_trait]
impl HandlerClient for HttpHandlerClient {
    async fn post_city(&self, city: &str) -> anyhow::Result<HandlerReply> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "city": city }))
            .send()
            .await
            .with_context(|| format!("Could not reach the weather service at {}", self.endpoint))?;

        let status = res.status().as_u16();
        let body = res.text().await.context("Failed to read weather service response")?;

        Ok(HandlerReply { status, body })
    }
}

/// Ephemeral state of the lookup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub city: String,
    pub loading: bool,
    pub error: Option<String>,
    pub payload: Option<WeatherPayload>,
}

impl ViewState {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into(), ..Self::default() }
    }

    /// Submit the current city. Blank input is rejected locally without calling `client`.
    pub async fn submit(&mut self, client: &dyn HandlerClient) {
        let city = self.city.trim().to_string();
        if city.is_empty() {
            self.error = Some(EMPTY_CITY.to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        self.payload = None;

        match fetch(client, &city).await {
            Ok(Ok(payload)) => self.payload = Some(payload),
            Ok(Err(message)) => self.error = Some(message),
            Err(fault) => {
                let message = fault.to_string();
                self.error = Some(if message.is_empty() { GENERIC_FAULT.to_string() } else { message });
            }
        }

        self.loading = false;
    }
}

/// Outer error is a fault, inner error a handled failure with its display message.
async fn fetch(
    client: &dyn HandlerClient,
    city: &str,
) -> anyhow::Result<Result<WeatherPayload, String>> {
    let reply = client.post_city(city).await?;

    if !reply.is_success() {
        return Ok(Err(failure_message(&reply)));
    }

    let payload: WeatherPayload = serde_json::from_str(&reply.body)
        .context("The weather service returned an unreadable response")?;

    Ok(Ok(payload))
}

fn failure_message(reply: &HandlerReply) -> String {
    if reply.status == 404 {
        return CITY_NOT_FOUND.to_string();
    }

    serde_json::from_str::<ErrorBody>(&reply.body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| UPSTREAM_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    #[derive(Debug)]
    struct ScriptedClient {
        calls: AtomicUsize,
        cities: Mutex<Vec<String>>,
        reply: Result<HandlerReply, String>,
    }

    impl ScriptedClient {
        fn replying(status: u16, body: &str) -> Self {
            Self::new(Ok(HandlerReply { status, body: body.to_string() }))
        }

        fn failing(message: &str) -> Self {
            Self::new(Err(message.to_string()))
        }

        fn new(reply: Result<HandlerReply, String>) -> Self {
            Self { calls: AtomicUsize::new(0), cities: Mutex::new(Vec::new()), reply }
        }
    }

    #[async_trait]
    impl HandlerClient for ScriptedClient {
        async fn post_city(&self, city: &str) -> anyhow::Result<HandlerReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.cities.lock().unwrap().push(city.to_string());
            self.reply.clone().map_err(|m| anyhow::anyhow!(m))
        }
    }

    const PARIS: &str = r#"{"city":"Paris","country":"FR","tempC":20,"feelsC":20,"condition":"Clear","description":"clear sky","icon":"01d","humidity":55,"windKmh":18,"sunrise":1000,"sunset":2000,"timezone":3600,"dt":1500}"#;

    #[tokio::test]
    async fn blank_city_is_rejected_locally() {
        for input in ["", "   ", "\t\n"] {
            let client = ScriptedClient::replying(200, PARIS);
            let mut state = ViewState::new(input);

            state.submit(&client).await;

            assert_eq!(client.calls.load(Ordering::SeqCst), 0);
            assert_eq!(state.error.as_deref(), Some(EMPTY_CITY));
            assert!(!state.loading);
        }
    }

    #[tokio::test]
    async fn success_stores_payload_and_clears_error() {
        let client = ScriptedClient::replying(200, PARIS);
        let mut state = ViewState::new("  Paris ");
        state.error = Some("old error".into());

        state.submit(&client).await;

        assert_eq!(client.cities.lock().unwrap().as_slice(), ["Paris"]);
        assert_eq!(state.error, None);
        assert!(!state.loading);
        let payload = state.payload.expect("payload");
        assert_eq!(payload.city, "Paris");
        assert_eq!(payload.wind_kmh, 18);
    }

    #[tokio::test]
    async fn not_found_overrides_body_message() {
        let client = ScriptedClient::replying(404, r#"{"error":"city not found"}"#);
        let mut state = ViewState::new("Atlantis");

        state.submit(&client).await;

        assert_eq!(state.error.as_deref(), Some(CITY_NOT_FOUND));
        assert_eq!(state.payload, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn handler_error_message_is_displayed() {
        let client = ScriptedClient::replying(500, r#"{"error":"internal issue"}"#);
        let mut state = ViewState::new("Paris");

        state.submit(&client).await;

        assert_eq!(state.error.as_deref(), Some("internal issue"));
    }

    #[tokio::test]
    async fn unreadable_error_body_uses_fallback() {
        let client = ScriptedClient::replying(503, "Service Unavailable");
        let mut state = ViewState::new("Paris");

        state.submit(&client).await;

        assert_eq!(state.error.as_deref(), Some(UPSTREAM_FALLBACK));
    }

    #[tokio::test]
    async fn new_submission_clears_previous_payload() {
        let mut state = ViewState::new("Paris");
        state.submit(&ScriptedClient::replying(200, PARIS)).await;
        assert!(state.payload.is_some());

        state.submit(&ScriptedClient::replying(400, r#"{"error":"City is required."}"#)).await;

        assert_eq!(state.payload, None);
        assert_eq!(state.error.as_deref(), Some("City is required."));
    }

    #[tokio::test]
    async fn transport_fault_shows_its_message() {
        let client = ScriptedClient::failing("connection refused");
        let mut state = ViewState::new("Paris");

        state.submit(&client).await;

        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn empty_fault_message_uses_generic_text() {
        let client = ScriptedClient::failing("");
        let mut state = ViewState::new("Paris");

        state.submit(&client).await;

        assert_eq!(state.error.as_deref(), Some(GENERIC_FAULT));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_fault() {
        let client = ScriptedClient::replying(200, "not json");
        let mut state = ViewState::new("Paris");

        state.submit(&client).await;

        assert_eq!(
            state.error.as_deref(),
            Some("The weather service returned an unreadable response")
        );
        assert_eq!(state.payload, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn http_client_posts_city_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/weather"))
            .and(body_json(serde_json::json!({ "city": "Paris" })))
            .respond_with(ResponseTemplate::new(200).set_body_string(PARIS))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpHandlerClient::new(format!("{}/api/weather", server.uri()));
        let reply = client.post_city("Paris").await.unwrap();

        assert_eq!(reply.status, 200);
        assert!(reply.is_success());
        assert_eq!(reply.body, PARIS);
    }
}
