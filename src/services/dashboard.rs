use std::{future::Future, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::{
    models::{
        dashboard::{DashboardData, F1Data},
        error::{join_error_detail, Error},
        race::NextRace,
        resolved::Resolved,
        standings::{Driver, Team},
        telemetry::FastestLap,
    },
    services::{fastest_lap, next_race, standings},
    utils::gateway::SourceGateway,
};

/// Every resolver already degrades to a static value, so a branch that fails
/// to complete is a defect and fails the whole request.
fn branch_failed(context: &str, branch: &str, err: JoinError) -> Error {
    let detail = join_error_detail(err);
    error!(branch, "Error processing {context}: {detail}");
    Error::internal(format!("Error processing {context}: {detail}"))
}

/// Runs one resolver on its own task with a shared handle to the gateway.
fn spawn_branch<T, F, Fut>(gateway: &Arc<dyn SourceGateway>, resolve: F) -> JoinHandle<Resolved<T>>
where
    T: Send + 'static,
    F: FnOnce(Arc<dyn SourceGateway>) -> Fut,
    Fut: Future<Output = Resolved<T>> + Send + 'static,
{
    tokio::spawn(resolve(gateway.clone()))
}

fn settle<T>(
    context: &str,
    branch: &str,
    joined: Result<Resolved<T>, JoinError>,
) -> Result<Resolved<T>, Error> {
    let resolved = joined.map_err(|e| branch_failed(context, branch, e))?;
    info!(branch, origin = %resolved.origin, "{context} branch resolved");
    Ok(resolved)
}

pub async fn get_dashboard(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<DashboardData, Error> {
    let drivers = spawn_branch(&gateway, move |g| async move {
        standings::driver_standings(g.as_ref(), now).await
    });
    let teams = spawn_branch(&gateway, move |g| async move {
        standings::constructor_standings(g.as_ref(), now).await
    });
    let race = spawn_branch(&gateway, move |g| async move {
        next_race::next_race(g.as_ref(), now).await
    });
    let lap = spawn_branch(&gateway, move |g| async move {
        fastest_lap::fastest_lap(g.as_ref(), now).await
    });

    let (drivers, teams, race, lap) = tokio::join!(drivers, teams, race, lap);

    const CONTEXT: &str = "dashboard data";
    Ok(DashboardData {
        top_drivers: settle(CONTEXT, "drivers", drivers)?.into_value(),
        top_teams: settle(CONTEXT, "teams", teams)?.into_value(),
        next_race: settle(CONTEXT, "next_race", race)?.into_value(),
        fastest_lap: settle(CONTEXT, "fastest_lap", lap)?.into_value(),
    })
}

/// Standings and next race without the fastest lap.
pub async fn get_f1_data(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<F1Data, Error> {
    let drivers = spawn_branch(&gateway, move |g| async move {
        standings::driver_standings(g.as_ref(), now).await
    });
    let teams = spawn_branch(&gateway, move |g| async move {
        standings::constructor_standings(g.as_ref(), now).await
    });
    let race = spawn_branch(&gateway, move |g| async move {
        next_race::next_race(g.as_ref(), now).await
    });

    let (drivers, teams, race) = tokio::join!(drivers, teams, race);

    const CONTEXT: &str = "F1 data";
    Ok(F1Data {
        top_drivers: settle(CONTEXT, "drivers", drivers)?.into_value(),
        top_teams: settle(CONTEXT, "teams", teams)?.into_value(),
        next_race: settle(CONTEXT, "next_race", race)?.into_value(),
    })
}

pub async fn get_standings(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<(Vec<Driver>, Vec<Team>), Error> {
    let drivers = spawn_branch(&gateway, move |g| async move {
        standings::driver_standings(g.as_ref(), now).await
    });
    let teams = spawn_branch(&gateway, move |g| async move {
        standings::constructor_standings(g.as_ref(), now).await
    });

    let (drivers, teams) = tokio::join!(drivers, teams);

    const CONTEXT: &str = "standings";
    Ok((
        settle(CONTEXT, "drivers", drivers)?.into_value(),
        settle(CONTEXT, "teams", teams)?.into_value(),
    ))
}

pub async fn get_driver_standings(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<Vec<Driver>, Error> {
    let drivers = spawn_branch(&gateway, move |g| async move {
        standings::driver_standings(g.as_ref(), now).await
    });
    Ok(settle("driver standings", "drivers", drivers.await)?.into_value())
}

pub async fn get_team_standings(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<Vec<Team>, Error> {
    let teams = spawn_branch(&gateway, move |g| async move {
        standings::constructor_standings(g.as_ref(), now).await
    });
    Ok(settle("team standings", "teams", teams.await)?.into_value())
}

pub async fn get_next_race(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<NextRace, Error> {
    let race = spawn_branch(&gateway, move |g| async move {
        next_race::next_race(g.as_ref(), now).await
    });
    Ok(settle("next race", "next_race", race.await)?.into_value())
}

pub async fn get_fastest_lap(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
) -> Result<FastestLap, Error> {
    let lap = spawn_branch(&gateway, move |g| async move {
        fastest_lap::fastest_lap(g.as_ref(), now).await
    });
    Ok(settle("fastest lap", "fastest_lap", lap.await)?.into_value())
}

pub async fn get_fastest_laps(
    gateway: Arc<dyn SourceGateway>,
    now: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<FastestLap>, Error> {
    let laps = spawn_branch(&gateway, move |g| async move {
        fastest_lap::top_fastest_laps(g.as_ref(), now, limit).await
    });
    Ok(settle("fastest laps", "fastest_laps", laps.await)?.into_value())
}
