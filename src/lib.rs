//! `CityScout` - city exploration aggregator
//!
//! Resolves a free-text place query into a geocoded location and fans it out
//! to independent enrichment providers (weather, movies, business listings,
//! events, trails), normalizing each provider's response and isolating each
//! provider's failures from its siblings.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod providers;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::CityScoutError;
pub use models::{Business, DailyForecast, ErrorRecord, Event, Location, Movie, Trail};
pub use providers::{Category, CategoryOutcome, ProviderResult};

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityScoutError>;
