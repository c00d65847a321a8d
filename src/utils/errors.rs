//! Error handling for EventHub
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the EventHub client
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Events API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token not found")]
    TokenNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Session error: {0}")]
    Session(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Token decoding error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Events REST API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Response carried no data")]
    MissingData,

    #[error("Events service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for EventHub operations
pub type Result<T> = std::result::Result<T, EventHubError>;

/// Result type alias for raw API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Message suitable for showing to a user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl EventHubError {
    /// Message suitable for the provider's error field.
    ///
    /// Server rejections are shown verbatim instead of being prefixed
    /// with the error category.
    pub fn user_message(&self) -> String {
        match self {
            EventHubError::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventHubError::Api(ApiError::Timeout) => true,
            EventHubError::Api(ApiError::ServiceUnavailable) => true,
            EventHubError::Api(ApiError::RequestFailed(_)) => true,
            EventHubError::Api(ApiError::Status { status, .. }) => *status >= 500,
            EventHubError::Api(_) => false,
            EventHubError::Config(_) => false,
            EventHubError::TokenNotFound => false,
            EventHubError::UserNotFound => false,
            EventHubError::EventNotFound { .. } => false,
            EventHubError::Session(_) => false,
            EventHubError::Http(_) => true,
            EventHubError::Serialization(_) => false,
            EventHubError::Io(_) => true,
            EventHubError::UrlParse(_) => false,
            EventHubError::Token(_) => false,
            EventHubError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventHubError::Config(_) => ErrorSeverity::Critical,
            EventHubError::TokenNotFound => ErrorSeverity::Warning,
            EventHubError::Api(ApiError::Unauthorized(_)) => ErrorSeverity::Warning,
            EventHubError::Api(ApiError::Rejected(_)) => ErrorSeverity::Warning,
            EventHubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
