use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// Every field is optional on the wire so that absent and `null` values reach validation and
/// get a proper error code instead of an extractor rejection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub username: Option<String>,
    pub guess_lat: Option<f64>,
    pub guess_lng: Option<f64>,
    pub true_lat: Option<f64>,
    pub true_lng: Option<f64>,
    pub image_id: Option<String>,
}

impl SubmitScoreRequest {
    pub fn guess(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.guess_lat?, self.guess_lng?))
    }

    pub fn truth(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.true_lat?, self.true_lng?))
    }
}

/// A submission that passed validation.
#[derive(Debug, PartialEq)]
pub struct ValidSubmission {
    pub username: String,
    pub image_id: String,
    pub guess: GeoPoint,
    pub truth: GeoPoint,
}
