//! Persisted auth session
//!
//! Keeps the bearer token (and the user it belongs to, when known) in a
//! small JSON file so that consecutive CLI invocations share a login.

use std::path::{Path, PathBuf};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::User;
use crate::utils::errors::{EventHubError, Result};

/// A stored login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
    pub saved_at: DateTime<Utc>,
}

/// Claims the client cares about. Backends disagree on where the user id
/// lives, so every common spelling is accepted.
#[derive(Debug, Default, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default, rename = "userId")]
    user_id: Option<serde_json::Value>,
    #[serde(default)]
    sub: Option<serde_json::Value>,
    /// NumericDate; may carry a fractional part
    #[serde(default)]
    exp: Option<f64>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
            saved_at: Utc::now(),
        }
    }

    /// Payload claims, decoded without signature verification since the
    /// client never holds the signing key.
    fn claims(&self) -> Result<TokenClaims> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<TokenClaims>(&self.token, &DecodingKey::from_secret(&[]), &validation)?;
        Ok(data.claims)
    }

    /// Id of the logged-in user: the stored profile first, token claims second
    pub fn user_id(&self) -> Result<i64> {
        if let Some(user) = &self.user {
            return Ok(user.id);
        }

        let claims = self.claims()?;
        [claims.id, claims.user_id, claims.sub]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                serde_json::Value::Number(n) => n.as_i64(),
                serde_json::Value::String(s) => s.parse().ok(),
                _ => None,
            })
            .ok_or(EventHubError::UserNotFound)
    }

    /// Expiry from the `exp` claim, if the token is a JWT carrying one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims()
            .ok()
            .and_then(|claims| claims.exp)
            .filter(|exp| exp.is_finite())
            .and_then(|exp| Utc.timestamp_opt(exp.floor() as i64, 0).single())
    }

    /// Opaque tokens and tokens without `exp` never expire client-side
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(false, |exp| exp <= now)
    }
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session; a missing file is not an error
    pub async fn load(&self) -> Result<Option<Session>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.store_error("read session file", e)),
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.store_error("create session directory", e))?;
        }

        let serialized = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, serialized)
            .await
            .map_err(|e| self.store_error("write session file", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.store_error("restrict session file permissions", e))?;
        }

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.store_error("remove session file", e)),
        }
    }

    fn store_error(&self, action: &str, error: std::io::Error) -> EventHubError {
        EventHubError::Session(format!("failed to {} {}: {}", action, self.path.display(), error))
    }

    /// Current usable session, treating an expired token as absent
    pub async fn active_session(&self, now: DateTime<Utc>) -> Result<Session> {
        let session = self.load().await?.ok_or(EventHubError::TokenNotFound)?;

        if session.is_expired(now) {
            warn!(path = %self.path.display(), "Stored token has expired");
            return Err(EventHubError::TokenNotFound);
        }

        Ok(session)
    }
}
