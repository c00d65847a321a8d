//! State management module
//!
//! This module holds the client-side state: the persisted session and the
//! event list provider built on top of it.

pub mod event_list;
pub mod listing;
pub mod session;

// Re-export commonly used state components
pub use event_list::{EventListProvider, EventListSnapshot};
pub use listing::{build_listing, ListingOptions};
pub use session::{Session, SessionStore};
