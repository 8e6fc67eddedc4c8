use serde_json::Value;
use tracing::warn;

use crate::utils::gateway::SourceGateway;

pub fn race_sessions_path(year: i32) -> String {
    format!("sessions?session_type=Race&year={year}")
}

/// Race sessions for `year`, or for the previous season if `year` has none yet.
///
/// Returns the season the sessions belong to alongside them.
pub async fn race_sessions(gateway: &dyn SourceGateway, year: i32) -> Option<(i32, Vec<Value>)> {
    for season in [year, year - 1] {
        match gateway.fetch_secondary(&race_sessions_path(season)).await {
            Some(sessions) if !sessions.is_empty() => return Some((season, sessions)),
            _ => warn!(season, "No race sessions found"),
        }
    }
    None
}
