use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::dashboard::{dashboard, f1_data, root},
    utils::state::AppState,
};

pub fn dashboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/dashboard", get(dashboard))
        .route("/f1-data", get(f1_data))
}
