//! Event list state provider
//!
//! Holds the browse list, the user's registrations and the category list.
//! Each operation does one round of REST calls and replaces its slice of
//! state wholesale. Failures of any kind end up in `error_message`;
//! subscribers receive a fresh snapshot after every change.

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};
use crate::config::settings::ListingConfig;
use crate::models::{Category, Event};
use crate::services::ServiceFactory;
use crate::state::listing::{build_listing, is_all_categories, sort_by_start_time, ListingOptions};
use crate::state::session::Session;
use crate::utils::errors::Result;
use crate::utils::logging::log_listing_built;

/// Everything a screen needs to render the event lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventListSnapshot {
    pub events: Vec<Event>,
    pub registered_events: Vec<Event>,
    pub categories: Vec<Category>,
    pub selected_category: Option<String>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

pub struct EventListProvider {
    services: ServiceFactory,
    listing: ListingConfig,
    state: EventListSnapshot,
    notifier: watch::Sender<EventListSnapshot>,
}

impl EventListProvider {
    pub fn new(services: ServiceFactory, listing: ListingConfig) -> Self {
        let (notifier, _) = watch::channel(EventListSnapshot::default());
        Self {
            services,
            listing,
            state: EventListSnapshot::default(),
            notifier,
        }
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<EventListSnapshot> {
        self.notifier.subscribe()
    }

    pub fn snapshot(&self) -> &EventListSnapshot {
        &self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn registered_events(&self) -> &[Event] {
        &self.state.registered_events
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.state.selected_category.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    pub fn clear_error(&mut self) {
        if self.state.error_message.take().is_some() {
            self.notify();
        }
    }

    /// Refetch all events and rebuild the browse list for `category`.
    ///
    /// `None` or the configured "All" label shows every category.
    pub async fn fetch_events(&mut self, category: Option<&str>) -> Result<()> {
        self.begin();
        let result = self.load_listing(category).await;
        let events = self.settle(result)?;

        self.state.events = events;
        self.state.selected_category = if is_all_categories(category, &self.listing.all_category_label) {
            None
        } else {
            category.map(str::to_string)
        };
        self.notify();
        Ok(())
    }

    /// Refetch the events the current user is registered for
    pub async fn fetch_registered_events(&mut self) -> Result<()> {
        self.begin();
        let result = match self.services.auth_service.session().await {
            Ok(session) => self.load_registered(&session).await,
            Err(e) => Err(e),
        };
        let registered = self.settle(result)?;

        self.state.registered_events = registered;
        self.notify();
        Ok(())
    }

    pub async fn fetch_categories(&mut self) -> Result<()> {
        self.begin();
        let result = match self.services.auth_service.token().await {
            Ok(token) => self.services.category_service.categories(&token).await,
            Err(e) => Err(e),
        };
        let categories = self.settle(result)?;

        self.state.categories = categories;
        self.notify();
        Ok(())
    }

    /// Register for an event, then refetch the user's registrations.
    /// The event leaves the browse list immediately.
    pub async fn register(&mut self, event_id: i64) -> Result<()> {
        self.begin();
        let result = self.change_registration(event_id, true).await;
        let registered = self.settle(result)?;

        self.state.registered_events = registered;
        self.state.events.retain(|e| e.id != event_id);
        self.notify();
        Ok(())
    }

    /// Unregister from an event, refetch registrations and rebuild the
    /// browse list so the event can reappear under the current filter.
    pub async fn unregister(&mut self, event_id: i64) -> Result<()> {
        self.begin();
        let result = self.change_registration(event_id, false).await;
        let registered = self.settle(result)?;

        self.state.registered_events = registered;
        self.notify();

        let category = self.state.selected_category.clone();
        self.fetch_events(category.as_deref()).await
    }

    /// Reload registrations, the browse list and categories in that order
    pub async fn refresh(&mut self) -> Result<()> {
        self.fetch_registered_events().await?;
        let category = self.state.selected_category.clone();
        self.fetch_events(category.as_deref()).await?;
        self.fetch_categories().await
    }

    async fn load_listing(&self, category: Option<&str>) -> Result<Vec<Event>> {
        let token = self.services.auth_service.token().await?;
        let fetched = self.services.event_service.all_events(&token).await?;
        let fetched_count = fetched.len();

        let options = ListingOptions {
            category,
            all_category_label: &self.listing.all_category_label,
            upcoming_only: self.listing.upcoming_only,
            now: Utc::now(),
        };
        let registered = &self.state.registered_events;
        let excluded = fetched.iter().filter(|e| registered.iter().any(|r| r.id == e.id)).count();
        let events = build_listing(fetched, registered, &options);

        log_listing_built(category, fetched_count, events.len(), excluded);
        Ok(events)
    }

    async fn load_registered(&self, session: &Session) -> Result<Vec<Event>> {
        let user_id = session.user_id()?;
        let mut events = self
            .services
            .event_service
            .events_for_user(&session.token, user_id)
            .await?;
        sort_by_start_time(&mut events);
        Ok(events)
    }

    async fn change_registration(&self, event_id: i64, register: bool) -> Result<Vec<Event>> {
        let session = self.services.auth_service.session().await?;
        let events = &self.services.event_service;
        let user_id = session.user_id().ok();

        if register {
            events.register(&session.token, event_id, user_id).await?;
        } else {
            events.unregister(&session.token, event_id, user_id).await?;
        }

        self.load_registered(&session).await
    }

    fn begin(&mut self) {
        self.state.is_loading = true;
        self.notify();
    }

    /// Leave the loading state; on failure record the message and publish
    fn settle<T>(&mut self, result: Result<T>) -> Result<T> {
        self.state.is_loading = false;
        match result {
            Ok(value) => {
                self.state.error_message = None;
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, severity = %e.severity(), "Event list operation failed");
                self.state.error_message = Some(e.user_message());
                self.notify();
                Err(e)
            }
        }
    }

    fn notify(&self) {
        debug!(
            events = self.state.events.len(),
            registered = self.state.registered_events.len(),
            loading = self.state.is_loading,
            "Publishing event list snapshot"
        );
        self.notifier.send_replace(self.state.clone());
    }
}
