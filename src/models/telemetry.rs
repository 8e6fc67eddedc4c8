use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLap {
    pub driver_name: String,
    pub abbreviation: String,
    pub team: String,
    /// `M:SS.mmm`
    pub lap_time: String,
    pub race_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub sector_times: Vec<f64>,
}

impl FastestLap {
    pub fn fallback() -> Self {
        FastestLap {
            driver_name: "Max Verstappen".to_string(),
            abbreviation: "VER".to_string(),
            team: "Red Bull Racing".to_string(),
            lap_time: "1:20.554".to_string(),
            race_name: "Abu Dhabi Grand Prix".to_string(),
            date: "2024-12-08".to_string(),
            sector_times: vec![25.5, 35.2, 19.854],
        }
    }
}
