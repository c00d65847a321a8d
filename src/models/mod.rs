//! Data models module
//!
//! This module contains the value types mirroring the events API

pub mod api;
pub mod category;
pub mod event;
pub mod user;

// Re-export commonly used models
pub use api::{ApiResponse, AuthPayload, LoginRequest, SignupRequest};
pub use category::Category;
pub use event::Event;
pub use user::{User, UserRole};
