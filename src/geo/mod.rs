use consts::{METERS_PER_MILE, MILES_PER_DEGREE};
use models::GeoPoint;

pub mod consts;
pub mod errors;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance in meters between the guess and the true location, rounded to one
/// decimal place.
///
/// Uses the spherical law of cosines. The cosine of the central angle is clamped to `[-1, 1]`
/// so that rounding error never pushes `acos` out of its domain, and identical points
/// short-circuit to exactly `0.0`.
///
/// Any finite input yields a finite, non-negative result. A NaN component is passed through
/// and the result is NaN; the function never panics.
pub fn distance(guess: GeoPoint, truth: GeoPoint) -> f64 {
    if guess == truth {
        return 0.0;
    }
    let lat_1 = guess.lat.to_radians();
    let lat_2 = truth.lat.to_radians();
    let delta_lng = (guess.lng - truth.lng).to_radians();
    let cos_central =
        lat_1.sin() * lat_2.sin() + lat_1.cos() * lat_2.cos() * delta_lng.cos();
    let central_angle = cos_central.clamp(-1.0, 1.0).acos();
    let meters = central_angle.to_degrees() * MILES_PER_DEGREE * METERS_PER_MILE;
    round_to_tenth(meters)
}

/// Half-way cases round away from zero after scaling by ten, so a stored `1.45` (really
/// `1.4499..`) becomes `1.5` because the product already rounds up to `14.5`.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
