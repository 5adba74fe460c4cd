use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cityscout::api::AppState;
use cityscout::{AppConfig, geocode, providers, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cityscout=info")),
        )
        .init();

    let config = AppConfig::from_env();

    // With a query argument, run a one-shot exploration; otherwise serve HTTP.
    match std::env::args().nth(1) {
        Some(query) => explore(config, &query).await,
        None => web::run(config).await,
    }
}

/// Resolve the query and print each category's results as they arrive
async fn explore(config: AppConfig, query: &str) -> Result<()> {
    let state = AppState::new(config)?;

    let location = geocode::resolve(&state.client, &state.config, query).await?;
    println!("{}", serde_json::to_string_pretty(&location)?);

    let mut outcomes = providers::fan_out(state.client.clone(), Arc::clone(&state.config), location);
    while let Some((category, outcome)) = outcomes.recv().await {
        println!("\n{category}:\n{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
