use serde::{Deserialize, Serialize};

use crate::models::{
    race::NextRace,
    standings::{Driver, Team},
    telemetry::FastestLap,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub top_drivers: Vec<Driver>,
    pub top_teams: Vec<Team>,
    pub next_race: NextRace,
    pub fastest_lap: FastestLap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct F1Data {
    pub top_drivers: Vec<Driver>,
    pub top_teams: Vec<Team>,
    pub next_race: NextRace,
}
