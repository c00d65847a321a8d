//! Events REST API client
//!
//! Thin wrapper around `reqwest` that knows the base URL, attaches the
//! bearer token, unwraps the `{success, data, message}` envelope and maps
//! transport failures onto [`ApiError`].

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use crate::config::settings::Settings;
use crate::models::ApiResponse;
use crate::utils::errors::{ApiError, ApiResult, EventHubError, Result};
use crate::utils::logging::{log_api_error, log_api_failure, log_api_request};

/// Shared HTTP client for the events API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.api.user_agent.clone())
            .build()
            .map_err(EventHubError::Http)?;

        Ok(Self {
            client,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        log_api_request(method.as_str(), path, token.is_some());

        let builder = self.client.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a path and unwrap the envelope's data
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path, token), path).await?;
        Self::decode_envelope::<T>(response, path).await?.into_data()
    }

    /// POST a JSON body and unwrap the envelope's data
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, token).json(body);
        let response = self.send(builder, path).await?;
        Self::decode_envelope::<T>(response, path).await?.into_data()
    }

    /// POST without a body and only check the envelope's success flag
    pub async fn post_ack(&self, path: &str, token: Option<&str>) -> ApiResult<Option<String>> {
        let response = self.send(self.request(Method::POST, path, token), path).await?;
        Self::decode_envelope::<serde_json::Value>(response, path).await?.into_ack()
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> ApiResult<Response> {
        builder.send().await.map_err(|e| {
            log_api_error("events", &e.to_string(), Some(path));
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::ServiceUnavailable
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })
    }

    async fn decode_envelope<T: DeserializeOwned>(response: Response, path: &str) -> ApiResult<ApiResponse<T>> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })?;

        debug!(path = path, status = status.as_u16(), bytes = body.len(), "API response received");

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message);
            log_api_failure("events", status.as_u16(), message.as_deref(), Some(path));

            return Err(match (status, message) {
                (StatusCode::UNAUTHORIZED, message) => {
                    ApiError::Unauthorized(message.unwrap_or_else(|| "invalid or expired token".to_string()))
                }
                (_, Some(message)) => ApiError::Rejected(message),
                (status, None) => ApiError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        serde_json::from_str::<ApiResponse<T>>(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("{} ({})", e, path)))
    }
}
