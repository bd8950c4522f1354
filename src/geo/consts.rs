/// Statute miles per degree of arc, expressed as 60 nautical miles times 1.1515.
pub const MILES_PER_DEGREE: f64 = 60.0 * 1.1515;
pub const METERS_PER_MILE: f64 = 1609.34;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;
