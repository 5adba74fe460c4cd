//! Movie search provider (TMDB compatible API)

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{Location, Movie};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Search for movies matching the original place query
pub async fn search(client: &Client, config: &AppConfig, location: &Location) -> Result<Vec<Movie>> {
    let key = config
        .movie_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("MOVIE_API_KEY is not set"))?;

    let url = format!(
        "{}/search/movie?api_key={}&query={}",
        config.movie_base_url,
        key,
        urlencoding::encode(&location.search_query)
    );

    debug!(query = %location.search_query, "searching movies");

    let response = client.get(&url).send().await?.error_for_status()?;
    let search: tmdb::SearchResponse = response.json().await?;

    Ok(search.results.iter().map(adapt).collect())
}

/// Narrow one raw movie entry to the allow-listed fields
pub fn adapt(movie: &tmdb::RawMovie) -> Movie {
    Movie {
        title: movie.title.clone(),
        overview: movie.overview.clone(),
        average_votes: movie.vote_average,
        total_votes: movie.vote_count,
        image_url: movie
            .poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
            .unwrap_or_default(),
        popularity: movie.popularity,
        released_on: movie.release_date.clone(),
    }
}

/// Movie search API response structures
pub mod tmdb {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub results: Vec<RawMovie>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawMovie {
        pub title: String,
        #[serde(default)]
        pub overview: String,
        #[serde(default)]
        pub vote_average: f64,
        #[serde(default)]
        pub vote_count: i64,
        #[serde(default)]
        pub poster_path: Option<String>,
        #[serde(default)]
        pub popularity: f64,
        #[serde(default)]
        pub release_date: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> tmdb::RawMovie {
        tmdb::RawMovie {
            title: "Sleepless in Seattle".to_string(),
            overview: "A widower's son calls a radio talk show.".to_string(),
            vote_average: 6.7,
            vote_count: 2103,
            poster_path: Some("/afcy2G.jpg".to_string()),
            popularity: 14.2,
            release_date: "1993-06-24".to_string(),
        }
    }

    #[test]
    fn test_adapt_maps_and_renames_fields() {
        let movie = adapt(&raw());
        assert_eq!(movie.title, "Sleepless in Seattle");
        assert_eq!(movie.average_votes, 6.7);
        assert_eq!(movie.total_votes, 2103);
        assert_eq!(movie.image_url, "https://image.tmdb.org/t/p/w500/afcy2G.jpg");
        assert_eq!(movie.released_on, "1993-06-24");
    }

    #[test]
    fn test_missing_poster_maps_to_empty_url() {
        let mut entry = raw();
        entry.poster_path = None;
        assert_eq!(adapt(&entry).image_url, "");
    }

    #[test]
    fn test_adapt_is_idempotent() {
        let entry = raw();
        assert_eq!(adapt(&entry), adapt(&entry));
    }

    #[test]
    fn test_parses_raw_search_body_with_sparse_entry() {
        let body = r#"{"page": 1, "results": [{"title": "Seattle"}]}"#;
        let search: tmdb::SearchResponse = serde_json::from_str(body).unwrap();
        let movie = adapt(&search.results[0]);
        assert_eq!(movie.title, "Seattle");
        assert_eq!(movie.overview, "");
        assert_eq!(movie.total_votes, 0);
    }
}
