use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub position: u32,
    pub driver_name: String,
    pub abbreviation: String,
    pub team: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub position: u32,
    pub team_name: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub drivers: Vec<Driver>,
    pub teams: Vec<Team>,
}

impl Standings {
    /// Final 2024 top three, served when nothing can be computed.
    pub fn fallback() -> Self {
        let driver = |position, name: &str, code: &str, team: &str, points| Driver {
            position,
            driver_name: name.to_string(),
            abbreviation: code.to_string(),
            team: team.to_string(),
            points,
        };
        let team = |position, name: &str, points| Team {
            position,
            team_name: name.to_string(),
            points,
        };
        Standings {
            drivers: vec![
                driver(1, "Max Verstappen", "VER", "Red Bull Racing", 393.0),
                driver(2, "Lando Norris", "NOR", "McLaren", 331.0),
                driver(3, "Charles Leclerc", "LEC", "Ferrari", 307.0),
            ],
            teams: vec![
                team(1, "Red Bull Racing", 860.0),
                team(2, "McLaren", 608.0),
                team(3, "Ferrari", 584.0),
            ],
        }
    }
}
