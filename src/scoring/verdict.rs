use serde::{Deserialize, Serialize};

const NICE_TRY_ABOVE_METERS: f64 = 1000.0;
const GOOD_JOB_ABOVE_METERS: f64 = 200.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Excellent,
    GoodJob,
    NiceTry,
}

impl Verdict {
    pub fn for_distance(distance_meters: f64) -> Self {
        if distance_meters > NICE_TRY_ABOVE_METERS {
            Verdict::NiceTry
        } else if distance_meters > GOOD_JOB_ABOVE_METERS {
            Verdict::GoodJob
        } else {
            Verdict::Excellent
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent!",
            Verdict::GoodJob => "Good job!",
            Verdict::NiceTry => "Hmm! Nice try.",
        }
    }
}

/// Kilometers with two decimals past 1 km, plain meters otherwise.
pub fn format_distance(distance_meters: f64) -> String {
    if distance_meters > NICE_TRY_ABOVE_METERS {
        format!("{:.2} KM", distance_meters / 1000.0)
    } else {
        format!("{} M", distance_meters)
    }
}
