use crate::{
    handlers::standings::{all_standings, constructor_standings, driver_standings},
    utils::state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn standings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/standings", get(all_standings))
        .route("/drivers", get(driver_standings))
        .route("/teams", get(constructor_standings))
}
