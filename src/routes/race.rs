use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::race::{fastest_lap, fastest_laps, next_race},
    utils::state::AppState,
};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/next-race", get(next_race))
        .route("/fastest-lap", get(fastest_lap))
        .route("/fastest-laps", get(fastest_laps))
}
