//! Services module
//!
//! This module contains the REST-facing services

pub mod api;
pub mod auth;
pub mod categories;
pub mod events;

// Re-export commonly used services
pub use api::ApiClient;
pub use auth::{AuthService, SignupOutcome};
pub use categories::CategoryService;
pub use events::EventService;

use crate::config::settings::Settings;
use crate::state::session::SessionStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
    pub category_service: CategoryService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one HTTP client
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(settings)?;
        let sessions = SessionStore::new(&settings.session.token_path);

        Ok(Self {
            auth_service: AuthService::new(api.clone(), sessions),
            event_service: EventService::new(api.clone()),
            category_service: CategoryService::new(api),
        })
    }
}
