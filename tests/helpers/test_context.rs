//! Test context for unified test setup
//!
//! This module provides a test context that wires the mock events API, a
//! temporary session file and the real services together.

use EventHub::config::Settings;
use EventHub::services::ServiceFactory;
use EventHub::state::{EventListProvider, Session, SessionStore};
use tempfile::TempDir;

use super::api_mock::EventsApiMock;
use super::test_data::{test_user, TEST_TOKEN};

/// Unified test context that manages all test components
pub struct TestContext {
    pub api: EventsApiMock,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub sessions: SessionStore,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Context with a stored session for the test user
    pub async fn new() -> Self {
        let ctx = Self::new_logged_out().await;
        let user = serde_json::from_value(test_user(super::test_data::TEST_USER_ID)).expect("valid test user");
        ctx.sessions
            .save(&Session::new(TEST_TOKEN, Some(user)))
            .await
            .expect("Failed to store test session");
        ctx
    }

    /// Context without any stored session
    pub async fn new_logged_out() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let api = EventsApiMock::new().await;
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = Self::create_test_settings(&api, &temp_dir);
        let services = ServiceFactory::new(&settings).expect("Failed to build services");
        let sessions = SessionStore::new(&settings.session.token_path);

        Self {
            api,
            settings,
            services,
            sessions,
            temp_dir,
        }
    }

    fn create_test_settings(api: &EventsApiMock, temp_dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = api.uri();
        settings.api.timeout_seconds = 5;
        settings.session.token_path = temp_dir
            .path()
            .join("session.json")
            .to_string_lossy()
            .into_owned();
        settings.logging.level = "debug".to_string();
        settings
    }

    pub fn provider(&self) -> EventListProvider {
        EventListProvider::new(self.services.clone(), self.settings.listing.clone())
    }
}
