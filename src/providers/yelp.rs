//! Business listings provider (Yelp Fusion compatible API, bearer-token auth)

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::models::{Business, Location};

/// Search for business listings around the formatted address
pub async fn search(
    client: &Client,
    config: &AppConfig,
    location: &Location,
) -> Result<Vec<Business>> {
    let key = config
        .yelp_api_key
        .as_deref()
        .ok_or_else(|| CityScoutError::config("YELP_API_KEY is not set"))?;

    let url = format!(
        "{}/businesses/search?location={}",
        config.yelp_base_url,
        urlencoding::encode(&location.formatted_query)
    );

    debug!(location = %location.formatted_query, "searching business listings");

    let response = client
        .get(&url)
        .bearer_auth(key)
        .send()
        .await?
        .error_for_status()?;
    let search: fusion::SearchResponse = response.json().await?;

    Ok(search.businesses.iter().map(adapt).collect())
}

/// Narrow one raw business entry to the allow-listed fields
pub fn adapt(business: &fusion::RawBusiness) -> Business {
    Business {
        name: business.name.clone(),
        image_url: business.image_url.clone(),
        price: business.price.clone(),
        rating: business.rating,
        url: business.url.clone(),
    }
}

/// Business search API response structures
pub mod fusion {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub businesses: Vec<RawBusiness>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawBusiness {
        pub name: String,
        #[serde(default)]
        pub image_url: String,
        /// Price tier like "$$"; absent for unrated businesses
        #[serde(default)]
        pub price: String,
        #[serde(default)]
        pub rating: f64,
        #[serde(default)]
        pub url: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_keeps_only_listing_fields() {
        let body = r#"{
            "total": 1,
            "businesses": [{
                "id": "abc123",
                "name": "Pike Place Chowder",
                "image_url": "https://img.example/chowder.jpg",
                "price": "$$",
                "rating": 4.5,
                "url": "https://yelp.example/pike-place-chowder",
                "review_count": 9000,
                "phone": "+12062672537"
            }]
        }"#;

        let search: fusion::SearchResponse = serde_json::from_str(body).unwrap();
        let business = adapt(&search.businesses[0]);

        assert_eq!(business.name, "Pike Place Chowder");
        assert_eq!(business.price, "$$");
        assert_eq!(business.rating, 4.5);
        assert_eq!(business.url, "https://yelp.example/pike-place-chowder");
    }

    #[test]
    fn test_unpriced_business_maps_to_empty_price() {
        let entry = fusion::RawBusiness {
            name: "Food Cart".to_string(),
            image_url: String::new(),
            price: String::new(),
            rating: 4.0,
            url: String::new(),
        };
        let business = adapt(&entry);
        assert_eq!(business.price, "");
        assert_eq!(adapt(&entry), business);
    }
}
