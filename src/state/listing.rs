//! Event list shaping
//!
//! Pure functions that turn the raw `GET /events` result into what the
//! browse list shows. Kept free of I/O so the ordering and exclusion rules
//! can be tested in isolation.

use std::collections::HashSet;
use chrono::{DateTime, Utc};
use crate::models::Event;

/// Options controlling a listing rebuild
#[derive(Debug, Clone)]
pub struct ListingOptions<'a> {
    pub category: Option<&'a str>,
    pub all_category_label: &'a str,
    pub upcoming_only: bool,
    pub now: DateTime<Utc>,
}

/// Drop every event the user is already registered for
pub fn exclude_registered(events: Vec<Event>, registered: &[Event]) -> Vec<Event> {
    let registered_ids: HashSet<i64> = registered.iter().map(|e| e.id).collect();
    events.into_iter().filter(|e| !registered_ids.contains(&e.id)).collect()
}

/// Whether a category selection means "show everything"
pub fn is_all_categories(category: Option<&str>, all_label: &str) -> bool {
    match category {
        None => true,
        Some(c) => c.trim().is_empty() || c.eq_ignore_ascii_case(all_label),
    }
}

/// Keep events whose category equals the selection exactly
pub fn filter_by_category(events: Vec<Event>, category: &str) -> Vec<Event> {
    events.into_iter().filter(|e| e.category == category).collect()
}

pub fn only_upcoming(events: Vec<Event>, now: DateTime<Utc>) -> Vec<Event> {
    events.into_iter().filter(|e| e.is_upcoming(now)).collect()
}

pub fn drop_soft_deleted(events: Vec<Event>) -> Vec<Event> {
    events.into_iter().filter(|e| !e.is_soft_deleted()).collect()
}

/// Stable ascending sort by start time
pub fn sort_by_start_time(events: &mut [Event]) {
    events.sort_by_key(|e| e.start_time);
}

/// Full pipeline: exclude registered, drop deleted, filter, upcoming, sort
pub fn build_listing(events: Vec<Event>, registered: &[Event], options: &ListingOptions<'_>) -> Vec<Event> {
    let mut events = drop_soft_deleted(exclude_registered(events, registered));

    if !is_all_categories(options.category, options.all_category_label) {
        if let Some(category) = options.category {
            events = filter_by_category(events, category);
        }
    }

    if options.upcoming_only {
        events = only_upcoming(events, options.now);
    }

    sort_by_start_time(&mut events);
    events
}
