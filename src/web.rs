use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::AppConfig;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(config)?;
    let port = state.config.port;
    let app = api::router(state).layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("CityScout listening on http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
