//! Community events provider (Meetup compatible API)

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{Event, Location};
use crate::providers::calendar_date;

/// Fetch upcoming events around a location's coordinates
pub async fn upcoming_events(
    client: &Client,
    config: &AppConfig,
    location: &Location,
) -> Result<Vec<Event>> {
    let key = config
        .meetup_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("MEETUP_API_KEY is not set"))?;

    let url = format!(
        "{}/find/upcoming_events?sign=true&photo-host=public&page=20&lat={}&lon={}&key={}",
        config.meetup_base_url, location.latitude, location.longitude, key
    );

    debug!(
        latitude = location.latitude,
        longitude = location.longitude,
        "searching upcoming events"
    );

    let response = client.get(&url).send().await?.error_for_status()?;
    let upcoming: meetup::UpcomingEventsResponse = response.json().await?;

    Ok(upcoming.events.iter().map(adapt).collect())
}

/// Narrow one raw event entry to the allow-listed fields
///
/// `creation_date` is the hosting group's creation time, rendered with the
/// same day-granular calendar-date format the weather adapter uses.
pub fn adapt(event: &meetup::RawEvent) -> Event {
    Event {
        link: event.link.clone(),
        name: event.name.clone(),
        creation_date: calendar_date(event.group.created / 1000),
        host: event.group.name.clone(),
    }
}

/// Events API response structures
pub mod meetup {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct UpcomingEventsResponse {
        #[serde(default)]
        pub events: Vec<RawEvent>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawEvent {
        #[serde(default)]
        pub link: String,
        pub name: String,
        pub group: RawGroup,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawGroup {
        pub name: String,
        /// Group creation time in epoch milliseconds
        #[serde(default)]
        pub created: i64,
    }
}
