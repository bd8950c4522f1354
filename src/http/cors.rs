use crate::cli::Args;
use http::header::{
    HeaderName, HeaderValue, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
    CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT,
};
use http::Method;
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    let origins: Vec<HeaderValue> = args
        .allowed_origins
        .iter()
        .filter_map(|url| {
            let origin = url.origin().ascii_serialization();
            match origin.parse() {
                Ok(origin) => Some(origin),
                Err(error) => {
                    tracing::warn!(%error, %url, "Skipping an origin that is not a valid header.");
                    None
                }
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            USER_AGENT,
            HeaderName::from_static("sec-fetch-mode"),
            REFERER,
            ORIGIN,
            ACCESS_CONTROL_REQUEST_METHOD,
            ACCESS_CONTROL_REQUEST_HEADERS,
            CONTENT_TYPE,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
