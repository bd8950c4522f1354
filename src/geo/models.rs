use crate::geo::consts::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::geo::errors::CoordinateError;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both components lie within their valid ranges. NaN and infinities are
    /// rejected as well, since they never fall inside a closed range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}
