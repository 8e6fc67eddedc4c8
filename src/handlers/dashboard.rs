use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::{json, Value};

use crate::{
    models::{
        dashboard::{DashboardData, F1Data},
        error::Error,
    },
    services::dashboard::{get_dashboard, get_f1_data},
    utils::state::AppState,
};

pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "message": "F1 Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "data_sources": {
            "primary": state.config.primary_api_url,
            "secondary": state.config.secondary_api_url,
            "calculation": "Championship points calculated from race results when the primary provider is unavailable"
        },
        "endpoints": {
            "/dashboard": "Drivers, teams, next race and fastest lap",
            "/f1-data": "Drivers, teams and next race",
            "/standings": "Top 10 drivers and teams",
            "/drivers": "Top 10 drivers",
            "/teams": "Top 10 teams",
            "/next-race": "Next race information",
            "/fastest-lap": "Fastest lap of the most recent race with sector times",
            "/fastest-laps": "Best lap per driver of the most recent race (?limit=N, default 10)"
        }
    }))
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Json<DashboardData>, Error> {
    let data = get_dashboard(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(data))
}

pub async fn f1_data(State(state): State<Arc<AppState>>) -> Result<Json<F1Data>, Error> {
    let data = get_f1_data(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(data))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
}
