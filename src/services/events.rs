//! Event service implementation
//!
//! REST calls for events and registrations. Every call needs a bearer
//! token; list shaping happens in the provider, not here.

use tracing::debug;
use crate::models::Event;
use crate::services::api::ApiClient;
use crate::utils::errors::{ApiError, EventHubError, Result};
use crate::utils::logging::log_event_action;

#[derive(Debug, Clone)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every event the backend knows about
    pub async fn all_events(&self, token: &str) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.api.get("events", Some(token)).await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    pub async fn event(&self, token: &str, event_id: i64) -> Result<Event> {
        match self.api.get::<Event>(&format!("events/{}", event_id), Some(token)).await {
            Err(ApiError::Status { status: 404, .. }) | Err(ApiError::MissingData) => {
                Err(EventHubError::EventNotFound { event_id })
            }
            other => Ok(other?),
        }
    }

    /// Events the given user is registered for
    pub async fn events_for_user(&self, token: &str, user_id: i64) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.api.get(&format!("events/user/{}", user_id), Some(token)).await?;
        debug!(user_id = user_id, count = events.len(), "Fetched registered events");
        Ok(events)
    }

    pub async fn register(&self, token: &str, event_id: i64, user_id: Option<i64>) -> Result<Option<String>> {
        let message = self.api.post_ack(&format!("events/{}/register", event_id), Some(token)).await?;
        log_event_action(event_id, "register", user_id, message.as_deref());
        Ok(message)
    }

    pub async fn unregister(&self, token: &str, event_id: i64, user_id: Option<i64>) -> Result<Option<String>> {
        let message = self.api.post_ack(&format!("events/{}/unregister", event_id), Some(token)).await?;
        log_event_action(event_id, "unregister", user_id, message.as_deref());
        Ok(message)
    }
}
