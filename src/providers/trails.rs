//! Trails provider (Hiking Project compatible API)

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{Location, Trail};

/// Fetch trails near a location's coordinates
pub async fn nearby(client: &Client, config: &AppConfig, location: &Location) -> Result<Vec<Trail>> {
    let key = config
        .trail_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("TRAIL_API_KEY is not set"))?;

    let url = format!(
        "{}/get-trails?lat={}&lon={}&maxDistance=200&key={}",
        config.trail_base_url, location.latitude, location.longitude, key
    );

    debug!(
        latitude = location.latitude,
        longitude = location.longitude,
        "searching nearby trails"
    );

    let response = client.get(&url).send().await?.error_for_status()?;
    let listing: hiking_project::TrailsResponse = response.json().await?;

    Ok(listing.trails.iter().map(adapt).collect())
}

/// Narrow one raw trail entry to the allow-listed fields
///
/// The upstream `conditionDate` is a `"YYYY-MM-DD HH:MM:SS"` timestamp; it is
/// split on the space into separate date and time fields.
pub fn adapt(trail: &hiking_project::RawTrail) -> Trail {
    let mut condition_parts = trail.condition_date.splitn(2, ' ');

    Trail {
        name: trail.name.clone(),
        location: trail.location.clone(),
        length: trail.length,
        stars: trail.stars,
        star_votes: trail.star_votes,
        summary: trail.summary.clone(),
        trail_url: trail.url.clone(),
        conditions: [trail.condition_status.as_str(), trail.condition_details.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
        condition_date: condition_parts.next().unwrap_or_default().to_string(),
        condition_time: condition_parts.next().unwrap_or_default().to_string(),
    }
}

/// Trails API response structures
pub mod hiking_project {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct TrailsResponse {
        #[serde(default)]
        pub trails: Vec<RawTrail>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawTrail {
        pub name: String,
        #[serde(default)]
        pub location: String,
        #[serde(default)]
        pub length: f64,
        #[serde(default)]
        pub stars: f64,
        #[serde(default, rename = "starVotes")]
        pub star_votes: i64,
        #[serde(default)]
        pub summary: String,
        #[serde(default)]
        pub url: String,
        #[serde(default, rename = "conditionStatus")]
        pub condition_status: String,
        #[serde(default, rename = "conditionDetails")]
        pub condition_details: String,
        #[serde(default, rename = "conditionDate")]
        pub condition_date: String,
    }
}
