use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    models::{
        resolved::{Origin, Resolved},
        telemetry::FastestLap,
    },
    services::sessions::race_sessions,
    utils::{
        drivers::identity_of,
        gateway::SourceGateway,
        race_utils::{format_lap_time, parse_datetime, str_field, str_field_or, u32_field},
    },
};

pub const DEFAULT_TOP_LAPS: usize = 10;

const SECTOR_KEYS: [&str; 3] = ["duration_sector_1", "duration_sector_2", "duration_sector_3"];

#[derive(Debug, Clone)]
struct CompletedSession {
    session_key: u64,
    race_name: String,
    date: String,
}

#[derive(Debug, Clone, Copy)]
struct Lap {
    driver_number: u32,
    lap_number: u32,
    duration: f64,
}

/// Outright fastest lap of the most recently completed race.
pub async fn fastest_lap(gateway: &dyn SourceGateway, now: DateTime<Utc>) -> Resolved<FastestLap> {
    let Some((session, laps)) = completed_session_laps(gateway, now).await else {
        return Resolved::fallback(FastestLap::fallback());
    };
    let Some(fastest) = laps.iter().copied().min_by(|a, b| a.duration.total_cmp(&b.duration)) else {
        return Resolved::fallback(FastestLap::fallback());
    };

    info!(
        session_key = session.session_key,
        driver = fastest.driver_number,
        duration = fastest.duration,
        "fastest lap resolved"
    );
    Resolved::new(build_lap(gateway, &session, fastest).await, Origin::Secondary)
}

/// Each driver's best lap from the most recently completed race, fastest first.
/// A `limit` of zero is raised to one so a resolved list is never empty.
pub async fn top_fastest_laps(
    gateway: &dyn SourceGateway,
    now: DateTime<Utc>,
    limit: usize,
) -> Resolved<Vec<FastestLap>> {
    let Some((session, laps)) = completed_session_laps(gateway, now).await else {
        return Resolved::fallback(vec![FastestLap::fallback()]);
    };
    let bests = best_lap_per_driver(&laps);
    if bests.is_empty() {
        return Resolved::fallback(vec![FastestLap::fallback()]);
    }

    let limit = limit.max(1);
    let mut results = Vec::with_capacity(limit.min(bests.len()));
    for lap in bests.into_iter().take(limit) {
        results.push(build_lap(gateway, &session, lap).await);
    }
    info!(session_key = session.session_key, count = results.len(), "top fastest laps resolved");
    Resolved::new(results, Origin::Secondary)
}

/// Most recently completed race session and its valid laps.
async fn completed_session_laps(
    gateway: &dyn SourceGateway,
    now: DateTime<Utc>,
) -> Option<(CompletedSession, Vec<Lap>)> {
    let Some((_, sessions)) = race_sessions(gateway, now.year()).await else {
        warn!("no race sessions, using fallback lap");
        return None;
    };
    let Some(session) = latest_completed(&sessions, now) else {
        warn!("no completed race sessions, using fallback lap");
        return None;
    };

    let Some(records) = gateway
        .fetch_secondary(&format!("laps?session_key={}", session.session_key))
        .await
    else {
        warn!(session_key = session.session_key, "no lap data, using fallback lap");
        return None;
    };
    let laps = valid_laps(&records);
    if laps.is_empty() {
        warn!(session_key = session.session_key, "no valid laps, using fallback lap");
        return None;
    }
    Some((session, laps))
}

fn latest_completed(sessions: &[Value], now: DateTime<Utc>) -> Option<CompletedSession> {
    let (session, _) = sessions
        .iter()
        .filter_map(|session| {
            let end = str_field(session, &["date_end"])
                .and_then(|raw| parse_datetime(raw, NaiveTime::MIN))?;
            (end < now).then_some((session, end))
        })
        .max_by_key(|(_, end)| *end)?;

    let date_start = str_field(session, &["date_start"]).unwrap_or_default();
    Some(CompletedSession {
        session_key: session.get("session_key").and_then(Value::as_u64)?,
        race_name: str_field_or(session, &["meeting_name"], "Unknown"),
        date: date_start.get(..10).unwrap_or(date_start).to_string(),
    })
}

/// Laps with a driver and a positive duration.
fn valid_laps(records: &[Value]) -> Vec<Lap> {
    records
        .iter()
        .filter_map(|record| {
            let duration = record.get("lap_duration").and_then(Value::as_f64)?;
            if duration <= 0.0 {
                return None;
            }
            Some(Lap {
                driver_number: u32_field(record, "driver_number")?,
                lap_number: u32_field(record, "lap_number").unwrap_or(1),
                duration,
            })
        })
        .collect()
}

/// One lap per driver, sorted ascending by duration.
fn best_lap_per_driver(laps: &[Lap]) -> Vec<Lap> {
    let mut bests: Vec<Lap> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();
    for lap in laps {
        match index.get(&lap.driver_number) {
            Some(&i) => {
                if lap.duration < bests[i].duration {
                    bests[i] = *lap;
                }
            }
            None => {
                index.insert(lap.driver_number, bests.len());
                bests.push(*lap);
            }
        }
    }
    bests.sort_by(|a, b| a.duration.total_cmp(&b.duration));
    bests
}

async fn build_lap(gateway: &dyn SourceGateway, session: &CompletedSession, lap: Lap) -> FastestLap {
    let identity = identity_of(lap.driver_number);
    FastestLap {
        driver_name: identity.name,
        abbreviation: identity.abbreviation,
        team: identity.team,
        lap_time: format_lap_time(lap.duration),
        race_name: session.race_name.clone(),
        date: session.date.clone(),
        sector_times: sector_times(gateway, session.session_key, lap.driver_number, lap.lap_number)
            .await,
    }
}

/// Sector splits for one lap. Empty when the provider has none.
pub async fn sector_times(
    gateway: &dyn SourceGateway,
    session_key: u64,
    driver_number: u32,
    lap_number: u32,
) -> Vec<f64> {
    let path = format!(
        "laps?session_key={session_key}&driver_number={driver_number}&lap_number={lap_number}"
    );
    let Some(record) = gateway.fetch_secondary(&path).await.and_then(|r| r.into_iter().next())
    else {
        debug!(session_key, driver_number, lap_number, "no sector data");
        return Vec::new();
    };
    SECTOR_KEYS
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_f64))
        .collect()
}
