//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(default, alias = "organizer_id")]
    pub organizer_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(alias = "start_time")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end_time")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "image_url", alias = "image")]
    pub image_url: String,
    #[serde(default, alias = "is_deleted")]
    pub is_deleted: Option<bool>,
}

impl Event {
    /// An event is upcoming while its start is strictly in the future
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }

    pub fn is_free(&self) -> bool {
        self.price.map_or(true, |p| p == 0.0)
    }

    /// Coordinates are only meaningful when both halves are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn is_soft_deleted(&self) -> bool {
        self.is_deleted == Some(true)
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_time.signed_duration_since(self.start_time)
    }
}
