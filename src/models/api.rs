//! REST envelope and auth payloads

use serde::{Deserialize, Serialize};
use crate::models::user::{User, UserRole};
use crate::utils::errors::{ApiError, ApiResult};

/// Envelope wrapping every API response: `{success, data, message}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` into a rejection
    pub fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "Request was not successful".to_string()),
            ));
        }

        self.data.ok_or(ApiError::MissingData)
    }

    /// Check success only, ignoring any payload
    pub fn into_ack(self) -> ApiResult<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "Request was not successful".to_string()),
            ))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Data returned by login and signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
