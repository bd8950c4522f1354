use crate::locations::models::LocationCode;
use crate::locations::random_search_area;
use crate::locations::responses::{
    LocationInfo, LocationsResponse, RandomAreaError, RandomAreaResponse,
};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn list() -> Json<LocationsResponse> {
    let locations = LocationCode::all()
        .into_iter()
        .map(|code| LocationInfo {
            code,
            name: code.name().to_string(),
            bounds: code.bounds(),
        })
        .collect();
    Json(LocationsResponse { locations })
}

#[axum::debug_handler]
pub async fn random_area(Path(code): Path<String>) -> (StatusCode, Json<RandomAreaResponse>) {
    let location = match code.parse::<LocationCode>() {
        Ok(location) => location,
        Err(error) => {
            tracing::info!(%error, "Refused to pick a random area.");
            return (
                StatusCode::BAD_REQUEST,
                Json(RandomAreaResponse {
                    error: true,
                    error_code: Some(RandomAreaError::UnknownLocation),
                    code: None,
                    name: None,
                    center: None,
                    search_box: None,
                }),
            );
        }
    };
    let area = random_search_area(location, &mut rand::thread_rng());
    (
        StatusCode::OK,
        Json(RandomAreaResponse {
            error: false,
            error_code: None,
            code: Some(location),
            name: Some(location.name().to_string()),
            center: Some(area.center),
            search_box: Some(area.search_box),
        }),
    )
}
