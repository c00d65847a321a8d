//! EventHub client
//!
//! Event discovery over a REST backend: browse upcoming events by category,
//! register and unregister, and keep a persisted login. This library provides
//! the API client, the session store and the event list provider that the
//! `eventhub` binary drives.

#![allow(non_snake_case)]

pub mod config;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventHubError, ApiError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{EventListProvider, EventListSnapshot, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
