//! Test data helpers for building API payloads

use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Opaque bearer token used by logged-in test contexts
pub const TEST_TOKEN: &str = "test-token";

/// Id of the user behind [`TEST_TOKEN`]
pub const TEST_USER_ID: i64 = 1;

/// Event JSON starting `hours_from_now` hours from the current time
pub fn test_event(id: i64, category: &str, hours_from_now: i64) -> Value {
    let start = Utc::now() + Duration::hours(hours_from_now);
    let end = start + Duration::hours(2);

    json!({
        "id": id,
        "organizerId": 100,
        "title": format!("Test event {}", id),
        "description": "An event used in tests",
        "category": category,
        "startTime": start.to_rfc3339_opts(SecondsFormat::Secs, true),
        "endTime": end.to_rfc3339_opts(SecondsFormat::Secs, true),
        "location": "Community Hall",
        "capacity": 50,
        "price": 0,
        "imageUrl": format!("https://cdn.example.com/{}.png", id),
        "isDeleted": false
    })
}

pub fn test_user(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Test User",
        "email": "test@example.com",
        "role": "user",
        "isActive": true,
        "isConfirmed": true,
        "isDeleted": false
    })
}

/// `{success: true, data}` envelope
pub fn ok_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data, "message": "OK" })
}

/// `{success: false, message}` envelope
pub fn failed_envelope(message: &str) -> Value {
    json!({ "success": false, "data": null, "message": message })
}

/// Ids of a list of events, in order
pub fn ids(events: &[EventHub::models::Event]) -> Vec<i64> {
    events.iter().map(|e| e.id).collect()
}
