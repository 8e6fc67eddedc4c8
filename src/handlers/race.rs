use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    models::{error::Error, race::NextRace, telemetry::FastestLap},
    services::{
        dashboard::{get_fastest_lap, get_fastest_laps, get_next_race},
        fastest_lap::DEFAULT_TOP_LAPS,
    },
    utils::state::AppState,
};

#[derive(Deserialize)]
pub struct FastestLapsQuery {
    limit: Option<usize>,
}

pub async fn next_race(State(state): State<Arc<AppState>>) -> Result<Json<NextRace>, Error> {
    let race = get_next_race(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(race))
}

pub async fn fastest_lap(State(state): State<Arc<AppState>>) -> Result<Json<FastestLap>, Error> {
    let lap = get_fastest_lap(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(lap))
}

pub async fn fastest_laps(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FastestLapsQuery>,
) -> Result<Json<Vec<FastestLap>>, Error> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LAPS);
    let laps = get_fastest_laps(state.gateway.clone(), state.clock.now(), limit).await?;
    Ok(Json(laps))
}
