//! Geocode resolution
//!
//! Turns a free-text place query into a [`Location`] via a Google-style
//! geocoding API. Only the first candidate of the upstream result list is
//! used; there is no ranking or disambiguation.

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::Location;

/// Resolve a free-text query into a geocoded location
///
/// Fails with a configuration error when the geocoding credential is absent,
/// and with an upstream error on network failure, non-2xx status, malformed
/// body, or an empty candidate list.
pub async fn resolve(client: &Client, config: &AppConfig, query: &str) -> Result<Location> {
    let key = config
        .geocode_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("GEOCODE_API_KEY is not set"))?;

    let url = format!(
        "{}/json?address={}&key={}",
        config.geocode_base_url,
        urlencoding::encode(query),
        key
    );

    debug!(%query, "geocoding query");

    let response = client.get(&url).send().await?.error_for_status()?;
    let geocode: google::GeocodeResponse = response.json().await?;

    location_from_results(query, geocode)
}

/// Map the geocoder's first candidate into a [`Location`]
///
/// `search_query` is stamped with the caller's original input text rather
/// than the provider's echo of it, so the field stays stable even if the
/// provider changes its echo format.
pub fn location_from_results(query: &str, response: google::GeocodeResponse) -> Result<Location> {
    let candidate = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| CityScoutError::upstream(format!("no geocoding candidates for {query:?}")))?;

    Ok(Location {
        search_query: query.to_string(),
        formatted_query: candidate.formatted_address,
        latitude: candidate.geometry.location.lat,
        longitude: candidate.geometry.location.lng,
    })
}

/// Geocoding API response structures
pub mod google {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        #[serde(default)]
        pub results: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub formatted_address: String,
        pub geometry: Geometry,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: LatLng,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatLng {
        pub lat: f64,
        pub lng: f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> google::GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_resolve_maps_first_candidate() {
        let response = parse(
            r#"{
                "status": "OK",
                "results": [{
                    "formatted_address": "Seattle, WA, USA",
                    "geometry": {"location": {"lat": 47.6, "lng": -122.3}}
                }]
            }"#,
        );

        let location = location_from_results("seattle", response).unwrap();
        assert_eq!(location.search_query, "seattle");
        assert_eq!(location.formatted_query, "Seattle, WA, USA");
        assert_eq!(location.latitude, 47.6);
        assert_eq!(location.longitude, -122.3);
    }

    #[test]
    fn test_first_candidate_wins_over_later_ones() {
        let response = parse(
            r#"{
                "results": [
                    {
                        "formatted_address": "Portland, OR, USA",
                        "geometry": {"location": {"lat": 45.5, "lng": -122.7}}
                    },
                    {
                        "formatted_address": "Portland, ME, USA",
                        "geometry": {"location": {"lat": 43.7, "lng": -70.3}}
                    }
                ]
            }"#,
        );

        let location = location_from_results("portland", response).unwrap();
        assert_eq!(location.formatted_query, "Portland, OR, USA");
        assert_eq!(location.latitude, 45.5);
    }

    #[test]
    fn test_empty_candidate_list_is_an_upstream_error() {
        let response = parse(r#"{"status": "ZERO_RESULTS", "results": []}"#);
        let err = location_from_results("nowhere", response).unwrap_err();
        assert!(matches!(err, CityScoutError::Upstream { .. }));
    }

    #[test]
    fn test_missing_results_field_is_an_upstream_error() {
        let response = parse(r#"{"status": "INVALID_REQUEST"}"#);
        let err = location_from_results("", response).unwrap_err();
        assert!(matches!(err, CityScoutError::Upstream { .. }));
    }
}
