use crate::geo::{self, models::GeoPoint};
use consts::{NO_POINTS, SCORE_THRESHOLDS};
use models::{Points, ScoreOutcome};

pub mod consts;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod verdict;

/// Maps a distance in meters onto the 0..=5 scale. Bounds are inclusive, so a guess exactly
/// 50 m away still scores 5. Anything past the last bound, NaN included, scores 0.
pub fn points(distance_meters: f64) -> Points {
    let distance_km = distance_meters / 1000.0;
    SCORE_THRESHOLDS
        .iter()
        .find(|threshold| distance_km <= threshold.max_distance_km)
        .map_or(NO_POINTS, |threshold| threshold.points)
}

pub fn score(guess: GeoPoint, truth: GeoPoint) -> ScoreOutcome {
    let distance = geo::distance(guess, truth);
    ScoreOutcome {
        distance,
        points: points(distance),
    }
}
