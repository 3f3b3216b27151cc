use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: f32,
}

/// A place (or event) listed on one of the browsing tabs.
///
/// `safety_rating` and `features` are display fields taken verbatim from the
/// catalog; nothing is derived from the reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub safety_rating: f32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyResource {
    pub id: String,
    pub name: String,
    /// Dialable text, not validated ("1-800-SAFE-NOW" is fine)
    pub number: String,
    pub available: String,
}

/// A resolved device position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    /// Horizontal accuracy in metres, when the platform reports one
    pub accuracy: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl LocationFix {
    pub fn now(coordinate: Coordinate, accuracy: Option<f64>) -> Self {
        Self {
            coordinate,
            accuracy,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}
