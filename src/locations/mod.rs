use crate::geo::models::GeoPoint;
use models::{LocationCode, SearchArea, SearchBox};
use rand::Rng;

pub mod handlers;
pub mod models;
pub mod responses;

/// Picks a uniformly random point inside the city and the square around it that the image
/// supplier should be queried with.
pub fn random_search_area<R: Rng>(location: LocationCode, rng: &mut R) -> SearchArea {
    let bounds = location.bounds();
    let center = GeoPoint {
        lat: rng.gen_range(bounds.min_lat..=bounds.max_lat),
        lng: rng.gen_range(bounds.min_lng..=bounds.max_lng),
    };
    debug_assert!(bounds.contains(center));
    SearchArea {
        center,
        search_box: SearchBox {
            north: center.lat + bounds.delta,
            south: center.lat - bounds.delta,
            east: center.lng + bounds.delta,
            west: center.lng - bounds.delta,
        },
    }
}
