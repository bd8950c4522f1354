use crate::geo::models::GeoPoint;
use consts::{REVERSE_ZOOM_LEVEL, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub mod consts;

/// Reverse-geocoding client used to tell whether a point lands on something with an address.
///
/// The check is advisory: transport and decoding failures count as "on land" so that an
/// unreachable Nominatim instance never blocks scoring.
#[derive(Clone)]
pub struct NominatimClient {
    http_client: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    display_name: Option<String>,
    error: Option<serde_json::Value>,
}

impl NominatimClient {
    pub fn new(base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub async fn is_on_land(&self, point: GeoPoint) -> bool {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("reverse");
        }
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &point.lat.to_string())
            .append_pair("lon", &point.lng.to_string())
            .append_pair("zoom", REVERSE_ZOOM_LEVEL)
            .append_pair("addressdetails", "0");

        let response = match self.http_client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, lat = point.lat, lng = point.lng, "Nominatim is unreachable.");
                return true;
            }
        };
        if !response.status().is_success() {
            return false;
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(%error, "Failed to read Nominatim response body.");
                return true;
            }
        };
        match serde_json::from_str::<ReverseGeocodeResponse>(&body) {
            Ok(reverse) => reverse.display_name.is_some() && reverse.error.is_none(),
            Err(error) => {
                tracing::warn!(%error, "Failed to decode Nominatim response.");
                true
            }
        }
    }
}
