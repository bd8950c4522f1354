use crate::scoring::models::{Points, ScoreThreshold};

/// Evaluated top to bottom; the first bound the distance does not exceed wins.
pub const SCORE_THRESHOLDS: [ScoreThreshold; 5] = [
    ScoreThreshold {
        max_distance_km: 0.05,
        points: 5,
    },
    ScoreThreshold {
        max_distance_km: 0.1,
        points: 4,
    },
    ScoreThreshold {
        max_distance_km: 0.2,
        points: 3,
    },
    ScoreThreshold {
        max_distance_km: 0.5,
        points: 2,
    },
    ScoreThreshold {
        max_distance_km: 1.0,
        points: 1,
    },
];
pub const NO_POINTS: Points = 0;
pub const MAX_USERNAME_LENGTH: usize = 32;
