use std::sync::Arc;

use crate::{
    models::{
        error::Error,
        standings::{Driver, Team},
    },
    services::dashboard::{get_driver_standings, get_standings, get_team_standings},
    utils::state::AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn all_standings(State(state): State<Arc<AppState>>) -> Result<Json<Value>, Error> {
    let (top_drivers, top_teams) = get_standings(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(json!({"top_drivers": top_drivers, "top_teams": top_teams})))
}

pub async fn driver_standings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Driver>>, Error> {
    let drivers = get_driver_standings(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(drivers))
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Team>>, Error> {
    let teams = get_team_standings(state.gateway.clone(), state.clock.now()).await?;
    Ok(Json(teams))
}
