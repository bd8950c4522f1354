use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};

pub type Points = u8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreThreshold {
    pub max_distance_km: f64,
    pub points: Points,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreOutcome {
    pub distance: f64,
    pub points: Points,
}

/// A scored guess as kept by the score storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub session_id: String,
    pub username: String,
    pub image_id: String,
    pub guess_location: GeoPoint,
    pub true_location: GeoPoint,
    pub distance: f64,
    pub points: Points,
    /// Unix seconds.
    pub timestamp: u64,
}
