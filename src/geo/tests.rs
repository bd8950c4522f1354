use crate::geo::errors::CoordinateError;
use crate::geo::models::GeoPoint;
use crate::geo::{distance, round_to_tenth};

const HANOI_CENTER: GeoPoint = GeoPoint {
    lat: 21.0285,
    lng: 105.8542,
};

// Meters covered by one degree of arc with the nautical-mile constant chain.
const METERS_PER_DEGREE: f64 = 60.0 * 1.1515 * 1609.34;

fn north_of_hanoi(meters: f64) -> GeoPoint {
    GeoPoint::new(HANOI_CENTER.lat + meters / METERS_PER_DEGREE, HANOI_CENTER.lng)
}

#[test]
fn test_identical_points_are_zero_apart() {
    assert_eq!(distance(HANOI_CENTER, HANOI_CENTER), 0.0);
    let pole = GeoPoint::new(-90.0, 180.0);
    assert_eq!(distance(pole, pole), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (HANOI_CENTER, GeoPoint::new(10.7769, 106.7009)),
        (GeoPoint::new(16.0544, 108.2022), GeoPoint::new(11.9404, 108.4583)),
        (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.5074, -0.1278)),
        (GeoPoint::new(0.0, -179.9), GeoPoint::new(0.0, 179.9)),
    ];
    for (a, b) in pairs {
        assert_eq!(distance(a, b), distance(b, a), "{a:?} <-> {b:?}");
    }
}

#[test]
fn test_distance_is_non_negative() {
    let points = [
        HANOI_CENTER,
        GeoPoint::new(90.0, 0.0),
        GeoPoint::new(-90.0, 0.0),
        GeoPoint::new(0.0, 180.0),
        GeoPoint::new(0.0, -180.0),
        GeoPoint::new(45.0, 45.0),
    ];
    for a in points {
        for b in points {
            assert!(distance(a, b) >= 0.0, "{a:?} -> {b:?}");
        }
    }
}

#[test]
fn test_small_offsets_from_hanoi() {
    let thirty = distance(north_of_hanoi(30.0), HANOI_CENTER);
    assert!((thirty - 30.0).abs() < 0.5, "got {thirty}");

    let seventy_five = distance(north_of_hanoi(75.0), HANOI_CENTER);
    assert!((seventy_five - 75.0).abs() < 0.5, "got {seventy_five}");

    let hundred_fifty = distance(north_of_hanoi(150.0), HANOI_CENTER);
    assert!((hundred_fifty - 150.0).abs() < 0.5, "got {hundred_fifty}");

    let two_km = distance(north_of_hanoi(2000.0), HANOI_CENTER);
    assert!((two_km - 2000.0).abs() < 0.5, "got {two_km}");
}

#[test]
fn test_hundredth_of_a_degree_north_of_hanoi() {
    let meters = distance(HANOI_CENTER, GeoPoint::new(21.0385, 105.8542));
    assert!((meters - 1112.0).abs() < 2.0, "got {meters}");
}

#[test]
fn test_ten_degrees_along_the_equator() {
    let meters = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0));
    assert!((meters - 1_111_893.0).abs() < 1.0, "got {meters}");
}

#[test]
fn test_result_is_rounded_to_one_decimal() {
    let meters = distance(north_of_hanoi(123.456), HANOI_CENTER);
    assert_eq!((meters * 10.0).round() / 10.0, meters);
}

#[test]
fn test_antipodal_and_extreme_inputs_stay_finite() {
    let cases = [
        (GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0)),
        (GeoPoint::new(0.0, 180.0), GeoPoint::new(0.0, -180.0)),
        (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0)),
        (GeoPoint::new(90.0, 180.0), GeoPoint::new(-90.0, -180.0)),
        (GeoPoint::new(90.0, -180.0), GeoPoint::new(90.0, 180.0)),
    ];
    for (a, b) in cases {
        let meters = distance(a, b);
        assert!(meters.is_finite(), "{a:?} -> {b:?} gave {meters}");
        assert!(meters >= 0.0);
    }
    let half_circumference = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
    assert!((half_circumference - 180.0 * METERS_PER_DEGREE).abs() < 1.0);
}

#[test]
fn test_nan_passes_through() {
    assert!(distance(GeoPoint::new(f64::NAN, 105.8542), HANOI_CENTER).is_nan());
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let guess = GeoPoint::new(21.0301, 105.8477);
    let first = distance(guess, HANOI_CENTER);
    for _ in 0..100 {
        assert_eq!(distance(guess, HANOI_CENTER).to_bits(), first.to_bits());
    }
}

#[test]
fn test_validate_accepts_range_edges() {
    assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
    assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
    assert!(HANOI_CENTER.validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_and_non_finite() {
    assert_eq!(
        GeoPoint::new(90.5, 0.0).validate(),
        Err(CoordinateError::LatitudeOutOfRange(90.5))
    );
    assert_eq!(
        GeoPoint::new(0.0, -180.01).validate(),
        Err(CoordinateError::LongitudeOutOfRange(-180.01))
    );
    assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
    assert!(GeoPoint::new(0.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_rounding_to_tenth_goes_away_from_zero_on_halves() {
    assert_eq!(round_to_tenth(0.25), 0.3);
    assert_eq!(round_to_tenth(1.45), 1.5);
    assert_eq!(round_to_tenth(1.44), 1.4);
    assert_eq!(round_to_tenth(1111.8957), 1111.9);
}
