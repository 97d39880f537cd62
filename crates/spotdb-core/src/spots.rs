use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::vibe::Vibe;

/// A hidden spot as held by the store.
///
/// Rating fields are independent of one another; `rating` is never derived
/// from `uniqueness`, `safety` or `crowd_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub vibe: Vibe,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable area label, e.g. `"Lashkar, Gwalior"`.
    pub location: String,
    #[serde(default)]
    pub best_time: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub uniqueness: f64,
    #[serde(default)]
    pub safety: f64,
    #[serde(default)]
    pub crowd_level: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stories_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

impl SpotRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Case-insensitive substring match against `name` or `description`.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn matches_term(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

pub(crate) fn default_created_by() -> String {
    "anonymous".to_string()
}

/// A community narrative attached to a spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

/// A spot together with its stories, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotDetail {
    #[serde(flatten)]
    pub spot: SpotRecord,
    pub stories: Vec<Story>,
}
