use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod dashboard;
pub mod race;
pub mod standings;

use crate::{
    handlers::dashboard::health_check,
    routes::{dashboard::dashboard_routes, race::race_routes, standings::standings_routes},
    utils::state::AppState,
};

pub fn make_app(state: AppState) -> Router {
    let state = Arc::new(state);

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(dashboard_routes())
        .merge(standings_routes())
        .merge(race_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    app
}
