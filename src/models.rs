//! Data models for the `CityScout` aggregator
//!
//! One record type per enrichment category, plus the `Location` that every
//! category request is keyed off. All of these are created fresh per request
//! and never mutated; each carries only the allow-listed fields clients may
//! rely on, never the raw upstream shape.

use serde::{Deserialize, Serialize};

/// A geocoded place, resolved once per end-user query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// The original free-text query, exactly as the caller supplied it
    pub search_query: String,
    /// Canonical formatted address from the geocoding provider
    pub formatted_query: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// One day of weather forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    /// Calendar date, formatted `"%a %b %d %Y"` (e.g. "Fri Jan 01 2021")
    pub time: String,
    pub forecast: String,
}

/// One business listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Business {
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub rating: f64,
    pub url: String,
}

/// One movie related to the searched place
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: String,
    pub popularity: f64,
    pub released_on: String,
}

/// One upcoming community event
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    pub link: String,
    pub name: String,
    pub creation_date: String,
    pub host: String,
}

/// One nearby trail with its latest reported conditions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trail {
    pub name: String,
    pub location: String,
    pub length: f64,
    pub stars: f64,
    pub star_votes: i64,
    pub summary: String,
    pub trail_url: String,
    pub conditions: String,
    pub condition_date: String,
    pub condition_time: String,
}

/// Client-facing substitute for a failed category
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorRecord {
    pub message: String,
}
