use serde::{Deserialize, Serialize};

/// The race shown in the dashboard's countdown card.
///
/// `date` and `time_left` are already rendered for display; the record is
/// always present even when every upstream is down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextRace {
    pub race_name: String,
    pub location: String,
    pub country: String,
    pub date: String,
    pub time_left: String,
}

impl NextRace {
    pub fn season_break() -> Self {
        NextRace {
            race_name: "Season Break".to_string(),
            location: "Checking for upcoming races...".to_string(),
            country: "Unknown".to_string(),
            date: "TBD".to_string(),
            time_left: "Season break".to_string(),
        }
    }
}
