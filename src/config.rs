//! Configuration for the `CityScout` aggregator
//!
//! All upstream credentials and base URLs are resolved once at startup into
//! an [`AppConfig`] that is passed explicitly to every component building an
//! upstream request. Base URLs default to the real provider endpoints and are
//! overridable so tests can point them at local mock servers.

use std::env;

/// Runtime configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,

    pub geocode_api_key: Option<String>,
    pub weather_api_key: Option<String>,
    pub yelp_api_key: Option<String>,
    pub movie_api_key: Option<String>,
    pub meetup_api_key: Option<String>,
    pub trail_api_key: Option<String>,

    pub geocode_base_url: String,
    pub weather_base_url: String,
    pub yelp_base_url: String,
    pub movie_base_url: String,
    pub meetup_base_url: String,
    pub trail_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            geocode_api_key: None,
            weather_api_key: None,
            yelp_api_key: None,
            movie_api_key: None,
            meetup_api_key: None,
            trail_api_key: None,
            geocode_base_url: "https://maps.googleapis.com/maps/api/geocode".to_string(),
            weather_base_url: "https://api.darksky.net/forecast".to_string(),
            yelp_base_url: "https://api.yelp.com/v3".to_string(),
            movie_base_url: "https://api.themoviedb.org/3".to_string(),
            meetup_base_url: "https://api.meetup.com".to_string(),
            trail_base_url: "https://www.hikingproject.com/data".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing credentials are not an error here; each provider reports a
    /// configuration error at call time if its key turns out to be absent.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            geocode_api_key: env_opt("GEOCODE_API_KEY"),
            weather_api_key: env_opt("WEATHER_API_KEY"),
            yelp_api_key: env_opt("YELP_API_KEY"),
            movie_api_key: env_opt("MOVIE_API_KEY"),
            meetup_api_key: env_opt("MEETUP_API_KEY"),
            trail_api_key: env_opt("TRAIL_API_KEY"),
            ..defaults
        }
    }
}

/// Read an env var, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_credentials() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert!(config.geocode_api_key.is_none());
        assert!(config.weather_api_key.is_none());
        assert!(config.yelp_api_key.is_none());
    }

    #[test]
    fn test_default_base_urls_point_at_providers() {
        let config = AppConfig::default();
        assert!(config.geocode_base_url.starts_with("https://maps.googleapis.com"));
        assert!(config.weather_base_url.starts_with("https://api.darksky.net"));
        assert!(config.trail_base_url.starts_with("https://www.hikingproject.com"));
    }
}
