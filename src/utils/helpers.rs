//! Helper functions and utilities
//!
//! Formatting helpers used by the command line front end.

use chrono::{DateTime, Duration, Utc};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Format how far away an event start is, relative to `now`
pub fn format_starts_in(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = start.signed_duration_since(now);

    if diff < Duration::zero() {
        "started".to_string()
    } else if diff < Duration::hours(1) {
        format!("in {} minutes", diff.num_minutes())
    } else if diff < Duration::days(1) {
        format!("in {} hours", diff.num_hours())
    } else if diff < Duration::weeks(2) {
        format!("in {} days", diff.num_days())
    } else {
        format_timestamp(start)
    }
}

/// Format an optional ticket price
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("{:.2}", p),
        _ => "free".to_string(),
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_starts_in() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_starts_in(now - Duration::minutes(5), now), "started");
        assert_eq!(format_starts_in(now + Duration::minutes(30), now), "in 30 minutes");
        assert_eq!(format_starts_in(now + Duration::hours(5), now), "in 5 hours");
        assert_eq!(format_starts_in(now + Duration::days(3), now), "in 3 days");
        assert_eq!(format_starts_in(now + Duration::days(30), now), "2024-05-31 12:00 UTC");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(None), "free");
        assert_eq!(format_price(Some(0.0)), "free");
        assert_eq!(format_price(Some(12.5)), "12.50");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer description", 10), "a longe...");
        assert_eq!(truncate_text("фестиваль свинга", 8), "фести...");
    }
}
