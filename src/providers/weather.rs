//! Daily weather forecast provider (Dark Sky compatible API)

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{DailyForecast, Location};
use crate::providers::calendar_date;

/// Fetch the daily forecast for a location's coordinates
pub async fn daily_forecast(
    client: &Client,
    config: &AppConfig,
    location: &Location,
) -> Result<Vec<DailyForecast>> {
    let key = config
        .weather_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("WEATHER_API_KEY is not set"))?;

    let url = format!(
        "{}/{}/{},{}",
        config.weather_base_url, key, location.latitude, location.longitude
    );

    debug!(
        latitude = location.latitude,
        longitude = location.longitude,
        "requesting daily forecast"
    );

    let response = client.get(&url).send().await?.error_for_status()?;
    let forecast: darksky::ForecastResponse = response.json().await?;

    Ok(forecast.daily.data.iter().map(adapt).collect())
}

/// Narrow one raw daily entry to the allow-listed forecast fields
pub fn adapt(day: &darksky::DailyEntry) -> DailyForecast {
    DailyForecast {
        time: calendar_date(day.time),
        forecast: day.summary.clone(),
    }
}

/// Forecast API response structures
pub mod darksky {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: DailyBlock,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyBlock {
        #[serde(default)]
        pub data: Vec<DailyEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyEntry {
        /// Unix timestamp (seconds) of the start of the forecast day
        pub time: i64,
        #[serde(default)]
        pub summary: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_adapt_keeps_summary_and_formats_date() {
        let day = darksky::DailyEntry {
            time: 1_609_459_200,
            summary: "Clear".to_string(),
        };

        let result = adapt(&day);
        assert_eq!(result.forecast, "Clear");
        // Fixed display format: abbreviated day name, month name, day, year.
        assert_eq!(result.time, "Fri Jan 01 2021");
    }

    // The date contract is day-granular UTC, "%a %b %d %Y".
    #[rstest]
    #[case(0, "Thu Jan 01 1970")]
    #[case(1_609_459_200, "Fri Jan 01 2021")]
    #[case(1_609_545_599, "Fri Jan 01 2021")]
    #[case(1_666_224_000, "Thu Oct 20 2022")]
    fn test_calendar_date_format(#[case] epoch: i64, #[case] expected: &str) {
        let day = darksky::DailyEntry {
            time: epoch,
            summary: String::new(),
        };
        assert_eq!(adapt(&day).time, expected);
    }

    #[test]
    fn test_adapt_is_idempotent() {
        let day = darksky::DailyEntry {
            time: 1_609_459_200,
            summary: "Partly cloudy".to_string(),
        };
        assert_eq!(adapt(&day), adapt(&day));
    }

    #[test]
    fn test_parses_raw_forecast_body() {
        let body = r#"{
            "latitude": 47.6,
            "longitude": -122.3,
            "daily": {
                "summary": "Rain throughout the week.",
                "data": [
                    {"time": 1609459200, "summary": "Clear", "icon": "clear-day"},
                    {"time": 1609545600, "summary": "Light rain"}
                ]
            }
        }"#;

        let forecast: darksky::ForecastResponse = serde_json::from_str(body).unwrap();
        let days: Vec<DailyForecast> = forecast.daily.data.iter().map(adapt).collect();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].forecast, "Clear");
        assert_eq!(days[1].time, "Sat Jan 02 2021");
    }
}
