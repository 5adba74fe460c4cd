//! HTTP handlers for the aggregator
//!
//! `GET /location?data=<query>` resolves a free-text query into a
//! [`Location`]; `GET /{category}?data=<Location JSON>` runs one enrichment
//! category against an already-resolved location. Every failure is logged
//! server-side and answered with a generic 500 so no upstream detail leaks
//! to the caller, and no category's failure touches its siblings.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::error;

use crate::config::AppConfig;
use crate::error::CityScoutError;
use crate::geocode;
use crate::models::Location;
use crate::providers::{self, Category};

const APOLOGY: &str = "Sorry, something went wrong";

/// Shared per-process state: one HTTP client, one immutable config
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("cityscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/location", get(get_location))
        .route("/{category}", get(get_category))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct DataParam {
    /// Query text for `/location`, JSON-encoded `Location` for categories.
    /// Absent means empty; input validation is deliberately not performed.
    #[serde(default)]
    data: String,
}

async fn get_location(
    State(state): State<AppState>,
    Query(params): Query<DataParam>,
) -> Response {
    match geocode::resolve(&state.client, &state.config, &params.data).await {
        Ok(location) => Json(location).into_response(),
        Err(err) => apologize("location", &err),
    }
}

async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<DataParam>,
) -> Response {
    let Ok(category) = category.parse::<Category>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let location = match serde_json::from_str::<Location>(&params.data) {
        Ok(location) => location,
        Err(err) => {
            let err = CityScoutError::input(format!("malformed location payload: {err}"));
            return apologize(category.as_str(), &err);
        }
    };

    match providers::enrich(&state.client, &state.config, &location, category).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => apologize(category.as_str(), &err),
    }
}

/// Log the real error, answer with the generic apology
fn apologize(endpoint: &str, err: &CityScoutError) -> Response {
    error!(endpoint, error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, APOLOGY).into_response()
}
