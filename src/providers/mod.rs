//! Enrichment providers fanned out from a resolved location
//!
//! Each submodule wraps one upstream data source: a request builder keyed off
//! the [`Location`] and a pure adapter narrowing the raw response entries to
//! the normalized record for that category. [`enrich`] dispatches a single
//! category; [`fan_out`] starts every category independently and delivers
//! each outcome as soon as it is ready, with no join barrier. One failing
//! category never blocks or blanks out another.

pub mod meetups;
pub mod movies;
pub mod trails;
pub mod weather;
pub mod yelp;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::DateTime;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::error;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{Business, DailyForecast, ErrorRecord, Event, Location, Movie, Trail};

/// One enrichment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Weather,
    Movies,
    Yelp,
    Meetups,
    Trails,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Weather,
        Category::Movies,
        Category::Yelp,
        Category::Meetups,
        Category::Trails,
    ];

    /// Wire name, matching the HTTP route segment
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Weather => "weather",
            Category::Movies => "movies",
            Category::Yelp => "yelp",
            Category::Meetups => "meetups",
            Category::Trails => "trails",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CityScoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weather" => Ok(Category::Weather),
            "movies" => Ok(Category::Movies),
            "yelp" => Ok(Category::Yelp),
            "meetups" => Ok(Category::Meetups),
            "trails" => Ok(Category::Trails),
            other => Err(CityScoutError::input(format!(
                "unknown enrichment category: {other:?}"
            ))),
        }
    }
}

/// One normalized entry from any enrichment category
///
/// Untagged, so a `Vec<ProviderResult>` serializes to the plain JSON array
/// the client renders for that category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProviderResult {
    Weather(DailyForecast),
    Movie(Movie),
    Business(Business),
    Event(Event),
    Trail(Trail),
}

/// The terminal state of one category's enrichment
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CategoryOutcome {
    Results(Vec<ProviderResult>),
    Failed(ErrorRecord),
}

/// Run a single category's enrichment against the given location
///
/// Any failure surfaces as this category's own error; nothing here can affect
/// a sibling category.
pub async fn enrich(
    client: &Client,
    config: &AppConfig,
    location: &Location,
    category: Category,
) -> Result<Vec<ProviderResult>> {
    let results = match category {
        Category::Weather => weather::daily_forecast(client, config, location)
            .await?
            .into_iter()
            .map(ProviderResult::Weather)
            .collect(),
        Category::Movies => movies::search(client, config, location)
            .await?
            .into_iter()
            .map(ProviderResult::Movie)
            .collect(),
        Category::Yelp => yelp::search(client, config, location)
            .await?
            .into_iter()
            .map(ProviderResult::Business)
            .collect(),
        Category::Meetups => meetups::upcoming_events(client, config, location)
            .await?
            .into_iter()
            .map(ProviderResult::Event)
            .collect(),
        Category::Trails => trails::nearby(client, config, location)
            .await?
            .into_iter()
            .map(ProviderResult::Trail)
            .collect(),
    };
    Ok(results)
}

/// Start every category independently and deliver each outcome as it arrives
///
/// Each category runs in its own task; a failed category sends an
/// [`ErrorRecord`] (with the details logged server-side) while its siblings
/// keep running. The receiver closes once all categories have reported.
pub fn fan_out(
    client: Client,
    config: Arc<AppConfig>,
    location: Location,
) -> mpsc::UnboundedReceiver<(Category, CategoryOutcome)> {
    let (tx, rx) = mpsc::unbounded_channel();

    for category in Category::ALL {
        let tx = tx.clone();
        let client = client.clone();
        let config = Arc::clone(&config);
        let location = location.clone();

        tokio::spawn(async move {
            let outcome = match enrich(&client, &config, &location, category).await {
                Ok(results) => CategoryOutcome::Results(results),
                Err(err) => {
                    error!(category = %category, error = %err, "category enrichment failed");
                    CategoryOutcome::Failed(ErrorRecord {
                        message: "Sorry, something went wrong".to_string(),
                    })
                }
            };
            // Receiver may have hung up; the category's work is still done.
            let _ = tx.send((category, outcome));
        });
    }

    rx
}

/// Format an epoch-seconds timestamp as a fixed-width UTC calendar date
///
/// `"%a %b %d %Y"`, e.g. `1609459200` becomes `"Fri Jan 01 2021"`. Day
/// granularity only; this is a display contract, not a timezone-correct
/// conversion. Out-of-range timestamps map to an empty string.
pub(crate) fn calendar_date(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|date| date.format("%a %b %d %Y").to_string())
        .unwrap_or_default()
}
