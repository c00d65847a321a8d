//! Mock events API server for testing
//!
//! This module provides a mock HTTP server that simulates the events REST
//! backend. It uses wiremock to create configurable mock responses.

use serde_json::Value;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::{failed_envelope, ok_envelope, TEST_TOKEN};

/// Mock events API server
pub struct EventsApiMock {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub message: Option<String>,
    pub expected_calls: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            status: 200,
            delay_ms: None,
            message: None,
            expected_calls: None,
        }
    }
}

impl MockResponseConfig {
    /// A `{success: false}` envelope with the given message
    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn expect(mut self, calls: u64) -> Self {
        self.expected_calls = Some(calls);
        self
    }
}

impl EventsApiMock {
    /// Create a new mock events API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn respond(config: &MockResponseConfig, data: Value) -> ResponseTemplate {
        let body = if config.success {
            ok_envelope(data)
        } else {
            failed_envelope(config.message.as_deref().unwrap_or("Request failed"))
        };

        let mut response = ResponseTemplate::new(config.status).set_body_json(body);
        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }

    async fn mount_authenticated(&self, http_method: &str, route: &str, data: Value, config: MockResponseConfig) {
        let mut mock = Mock::given(method(http_method))
            .and(path(route))
            .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(Self::respond(&config, data));

        if let Some(calls) = config.expected_calls {
            mock = mock.expect(calls);
        }

        mock.mount(&self.server).await;
    }

    /// Setup mock for `GET /events`
    pub async fn mock_events(&self, events: Vec<Value>, config: MockResponseConfig) {
        self.mount_authenticated("GET", "/events", Value::Array(events), config).await;
    }

    /// Setup mock for `GET /events/{id}`
    pub async fn mock_event(&self, event: Value) {
        let id = event["id"].as_i64().unwrap_or_default();
        self.mount_authenticated("GET", &format!("/events/{}", id), event, MockResponseConfig::default()).await;
    }

    /// Setup mock for `GET /events/user/{user_id}`
    pub async fn mock_user_events(&self, user_id: i64, events: Vec<Value>, config: MockResponseConfig) {
        self.mount_authenticated("GET", &format!("/events/user/{}", user_id), Value::Array(events), config).await;
    }

    /// Like [`mock_user_events`](Self::mock_user_events) but only answers `times` requests,
    /// letting a later mount take over.
    pub async fn mock_user_events_times(&self, user_id: i64, events: Vec<Value>, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/events/user/{}", user_id)))
            .respond_with(Self::respond(&MockResponseConfig::default(), Value::Array(events)))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `GET /categories`
    pub async fn mock_categories(&self, categories: Value, config: MockResponseConfig) {
        self.mount_authenticated("GET", "/categories", categories, config).await;
    }

    /// Setup mock for `POST /events/{id}/register`
    pub async fn mock_register(&self, event_id: i64, config: MockResponseConfig) {
        self.mount_authenticated("POST", &format!("/events/{}/register", event_id), Value::Null, config).await;
    }

    /// Setup mock for `POST /events/{id}/unregister`
    pub async fn mock_unregister(&self, event_id: i64, config: MockResponseConfig) {
        self.mount_authenticated("POST", &format!("/events/{}/unregister", event_id), Value::Null, config).await;
    }

    /// Setup mock for `GET /auth/me`
    pub async fn mock_me(&self, user: Value, config: MockResponseConfig) {
        self.mount_authenticated("GET", "/auth/me", user, config).await;
    }

    /// Setup mock for `POST /auth/login` expecting the given credentials
    pub async fn mock_login(&self, email: &str, password: &str, data: Value, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({ "email": email, "password": password })))
            .respond_with(Self::respond(&config, data))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `POST /auth/signup`
    pub async fn mock_signup(&self, data: Value, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(Self::respond(&config, data))
            .mount(&self.server)
            .await;
    }

    /// Respond to any request on a route with a raw status and body
    pub async fn mock_raw(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.map_or(0, |r| r.len())
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
