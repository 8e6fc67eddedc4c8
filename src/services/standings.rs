use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    models::{
        resolved::{Origin, Resolved},
        standings::{Driver, Standings, Team},
    },
    services::sessions::race_sessions,
    utils::{
        drivers::identity_of,
        gateway::SourceGateway,
        race_utils::{number_field, parse_datetime, points_for, str_field, str_field_or, u32_field},
    },
};

pub const TOP_N: usize = 10;

pub async fn driver_standings(gateway: &dyn SourceGateway, now: DateTime<Utc>) -> Resolved<Vec<Driver>> {
    let year = now.year();
    if let Some(drivers) = primary_driver_standings(gateway, year).await {
        info!(year, count = drivers.len(), "driver standings from primary provider");
        return Resolved::new(drivers, Origin::Primary);
    }
    info!("Using calculated standings from race results");
    let derived = derive_standings(gateway, year).await;
    Resolved::new(derived.value.drivers, derived.origin)
}

pub async fn constructor_standings(gateway: &dyn SourceGateway, now: DateTime<Utc>) -> Resolved<Vec<Team>> {
    let year = now.year();
    if let Some(teams) = primary_team_standings(gateway, year).await {
        info!(year, count = teams.len(), "team standings from primary provider");
        return Resolved::new(teams, Origin::Primary);
    }
    info!("Using calculated team standings from race results");
    let derived = derive_standings(gateway, year).await;
    Resolved::new(derived.value.teams, derived.origin)
}

async fn primary_standings(gateway: &dyn SourceGateway, path: &str) -> Option<Vec<Value>> {
    let data = gateway.fetch_primary(path).await?;
    let Some(standings) = data.get("standings").and_then(Value::as_array) else {
        warn!(path, "primary standings response has no standings list");
        return None;
    };
    if standings.is_empty() {
        warn!(path, "primary standings list is empty");
        return None;
    }
    Some(standings.iter().take(TOP_N).cloned().collect())
}

async fn primary_driver_standings(gateway: &dyn SourceGateway, year: i32) -> Option<Vec<Driver>> {
    let standings = primary_standings(gateway, &format!("{year}/standings/drivers")).await?;
    Some(
        standings
            .iter()
            .enumerate()
            .map(|(i, driver)| Driver {
                position: i as u32 + 1,
                driver_name: str_field_or(driver, &["driver_name", "name"], "Unknown"),
                abbreviation: str_field_or(driver, &["abbreviation", "code"], "UNK"),
                team: str_field_or(driver, &["team", "constructor"], "Unknown"),
                points: number_field(driver, "points").unwrap_or(0.0),
            })
            .collect(),
    )
}

async fn primary_team_standings(gateway: &dyn SourceGateway, year: i32) -> Option<Vec<Team>> {
    let standings = primary_standings(gateway, &format!("{year}/standings/teams")).await?;
    Some(
        standings
            .iter()
            .enumerate()
            .map(|(i, team)| Team {
                position: i as u32 + 1,
                team_name: str_field_or(team, &["team_name", "name"], "Unknown"),
                points: number_field(team, "points").unwrap_or(0.0),
            })
            .collect(),
    )
}

/// Championship standings computed from the final classified position of
/// every car in every race session of the season.
pub async fn derive_standings(gateway: &dyn SourceGateway, year: i32) -> Resolved<Standings> {
    let Some((season, sessions)) = race_sessions(gateway, year).await else {
        warn!(year, "no race sessions to derive standings from, using fallback");
        return Resolved::fallback(Standings::fallback());
    };

    let mut table = PointsTable::default();
    for session in &sessions {
        let Some(session_key) = session.get("session_key").and_then(Value::as_u64) else {
            warn!("race session without session_key, skipping");
            continue;
        };
        let Some(positions) = gateway
            .fetch_secondary(&format!("position?session_key={session_key}"))
            .await
        else {
            continue;
        };
        for (number, position) in final_positions(&positions) {
            table.award(DriverKey { number, season }, position);
        }
    }

    if table.is_empty() {
        warn!(season, "no position data in any race session, using fallback standings");
        return Resolved::fallback(Standings::fallback());
    }
    Resolved::new(table.into_standings(), Origin::Derived)
}

/// Last recorded position per car, in order of each car's first appearance.
pub fn final_positions(records: &[Value]) -> Vec<(u32, u32)> {
    let mut latest: Vec<(u32, DateTime<Utc>, u32)> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for record in records {
        let (Some(number), Some(position)) =
            (u32_field(record, "driver_number"), u32_field(record, "position"))
        else {
            continue;
        };
        let Some(at) = str_field(record, &["date"]).and_then(|d| parse_datetime(d, NaiveTime::MIN))
        else {
            continue;
        };
        match index.get(&number) {
            Some(&i) => {
                if at > latest[i].1 {
                    latest[i] = (number, at, position);
                }
            }
            None => {
                index.insert(number, latest.len());
                latest.push((number, at, position));
            }
        }
    }

    latest
        .into_iter()
        .map(|(number, _, position)| (number, position))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverKey {
    pub number: u32,
    pub season: i32,
}

/// Running totals that keep first-seen order, so equal totals rank in
/// accumulation order after a stable sort.
#[derive(Debug, Default)]
pub struct PointsTable {
    drivers: Vec<(DriverKey, u32)>,
    driver_index: HashMap<DriverKey, usize>,
    teams: Vec<(String, u32)>,
    team_index: HashMap<String, usize>,
}

impl PointsTable {
    pub fn award(&mut self, key: DriverKey, position: u32) {
        let points = points_for(position);

        match self.driver_index.get(&key) {
            Some(&i) => self.drivers[i].1 += points,
            None => {
                self.driver_index.insert(key, self.drivers.len());
                self.drivers.push((key, points));
            }
        }

        let team = identity_of(key.number).team;
        match self.team_index.get(&team) {
            Some(&i) => self.teams[i].1 += points,
            None => {
                self.team_index.insert(team.clone(), self.teams.len());
                self.teams.push((team, points));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn into_standings(self) -> Standings {
        let mut drivers = self.drivers;
        let mut teams = self.teams;
        drivers.sort_by(|a, b| b.1.cmp(&a.1));
        teams.sort_by(|a, b| b.1.cmp(&a.1));

        Standings {
            drivers: drivers
                .into_iter()
                .take(TOP_N)
                .enumerate()
                .map(|(i, (key, points))| {
                    let identity = identity_of(key.number);
                    Driver {
                        position: i as u32 + 1,
                        driver_name: identity.name,
                        abbreviation: identity.abbreviation,
                        team: identity.team,
                        points: f64::from(points),
                    }
                })
                .collect(),
            teams: teams
                .into_iter()
                .take(TOP_N)
                .enumerate()
                .map(|(i, (team_name, points))| Team {
                    position: i as u32 + 1,
                    team_name,
                    points: f64::from(points),
                })
                .collect(),
        }
    }
}
