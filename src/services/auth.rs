//! Authentication service implementation
//!
//! This service handles login, signup and logout against the events API and
//! owns the persisted session that every authenticated call draws its
//! bearer token from.

use chrono::Utc;
use tracing::{info, debug};
use crate::models::{AuthPayload, LoginRequest, SignupRequest, User, UserRole};
use crate::services::api::ApiClient;
use crate::state::session::{Session, SessionStore};
use crate::utils::errors::{ApiError, EventHubError, Result};
use crate::utils::logging::log_auth_warning;

/// Result of a signup call
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub user: Option<User>,
    /// The backend returned a token and the session was stored
    pub logged_in: bool,
}

/// Authentication service for managing the client session
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    sessions: SessionStore,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient, sessions: SessionStore) -> Self {
        Self { api, sessions }
    }

    /// Log in and persist the returned token
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        validate_credentials(email, password)?;
        debug!(email = %email, "Logging in");

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let payload: AuthPayload = self.api.post("auth/login", &request, None).await?;
        let token = payload
            .token
            .ok_or_else(|| ApiError::InvalidResponse("login response carried no token".to_string()))?;

        let user = match payload.user {
            Some(user) => user,
            None => self.api.get::<User>("auth/me", Some(&token)).await?,
        };

        self.sessions.save(&Session::new(token, Some(user.clone()))).await?;
        info!(user_id = user.id, "Logged in");
        Ok(user)
    }

    /// Create an account. Some backends log the user straight in, others
    /// require email confirmation first.
    pub async fn signup(&self, name: &str, email: &str, password: &str, role: Option<UserRole>) -> Result<SignupOutcome> {
        validate_credentials(email, password)?;
        if name.trim().is_empty() {
            return Err(EventHubError::InvalidInput("Name is required".to_string()));
        }

        let request = SignupRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        };
        let payload: AuthPayload = self.api.post("auth/signup", &request, None).await?;

        let logged_in = match &payload.token {
            Some(token) => {
                self.sessions.save(&Session::new(token.clone(), payload.user.clone())).await?;
                true
            }
            None => false,
        };

        info!(email = %request.email, logged_in = logged_in, "Account created");
        Ok(SignupOutcome {
            user: payload.user,
            logged_in,
        })
    }

    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear().await?;
        info!("Logged out");
        Ok(())
    }

    /// The active session, or `TokenNotFound`
    pub async fn session(&self) -> Result<Session> {
        self.sessions.active_session(Utc::now()).await.map_err(|e| {
            if matches!(e, EventHubError::TokenNotFound) {
                log_auth_warning("no usable token in session store");
            }
            e
        })
    }

    /// Bearer token for authenticated calls
    pub async fn token(&self) -> Result<String> {
        Ok(self.session().await?.token)
    }

    /// Fetch the profile behind the current token and refresh the stored copy
    pub async fn current_user(&self) -> Result<User> {
        let session = self.session().await?;
        let user: User = self.api.get("auth/me", Some(&session.token)).await?;

        if session.user.as_ref() != Some(&user) {
            self.sessions.save(&Session::new(session.token, Some(user.clone()))).await?;
        }

        Ok(user)
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(EventHubError::InvalidInput(format!("Invalid email address: {}", email)));
    }
    if password.is_empty() {
        return Err(EventHubError::InvalidInput("Password is required".to_string()));
    }
    Ok(())
}
