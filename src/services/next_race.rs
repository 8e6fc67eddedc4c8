use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    models::{
        race::NextRace,
        resolved::{Origin, Resolved},
    },
    utils::{
        gateway::SourceGateway,
        race_utils::{
            format_race_date, parse_datetime, race_start_time, str_field, str_field_or, time_left,
            time_left_raw,
        },
    },
};

/// Resolves the next race, trying in order: the primary provider's schedule,
/// the secondary provider's meetings, next season's opener, and finally a
/// static season-break record.
pub async fn next_race(gateway: &dyn SourceGateway, now: DateTime<Utc>) -> Resolved<NextRace> {
    let year = now.year();

    if let Some(race) = from_primary_schedule(gateway, year, now).await {
        info!(race = %race.race_name, "next race from primary schedule");
        return Resolved::new(race, Origin::Primary);
    }
    if let Some(race) = from_secondary_meetings(gateway, year, now).await {
        info!(race = %race.race_name, "next race from secondary meetings");
        return Resolved::new(race, Origin::Secondary);
    }
    if let Some(race) = next_season_opener(gateway, year + 1, now).await {
        info!(race = %race.race_name, "next race is next season's opener");
        return Resolved::new(race, Origin::NextSeason);
    }

    warn!(year, "no upcoming race from any source, reporting season break");
    Resolved::fallback(NextRace::season_break())
}

/// Earliest entry whose `date_key` parses to a time strictly after `now`.
/// Unparseable entries are logged and skipped.
fn earliest_upcoming<'a>(
    records: &'a [Value],
    date_key: &str,
    date_only_at: NaiveTime,
    now: DateTime<Utc>,
) -> Option<(&'a Value, DateTime<Utc>)> {
    records
        .iter()
        .filter_map(|record| {
            let raw = str_field(record, &[date_key]).filter(|raw| !raw.is_empty())?;
            match parse_datetime(raw, date_only_at) {
                Some(at) => Some((record, at)),
                None => {
                    error!(date = raw, "Error parsing race date");
                    None
                }
            }
        })
        .filter(|(_, at)| *at > now)
        .min_by_key(|(_, at)| *at)
}

async fn from_primary_schedule(
    gateway: &dyn SourceGateway,
    year: i32,
    now: DateTime<Utc>,
) -> Option<NextRace> {
    let data = gateway.fetch_primary(&year.to_string()).await?;
    let races = data.get("races").and_then(Value::as_array)?;
    let (race, at) = earliest_upcoming(races, "date", race_start_time(), now)?;

    Some(NextRace {
        race_name: str_field_or(race, &["race_name", "name"], "Unknown"),
        location: str_field_or(race, &["location", "circuit"], "Unknown"),
        country: str_field_or(race, &["country"], "Unknown"),
        date: format_race_date(at),
        time_left: time_left(at, now),
    })
}

async fn from_secondary_meetings(
    gateway: &dyn SourceGateway,
    year: i32,
    now: DateTime<Utc>,
) -> Option<NextRace> {
    let meetings = gateway.fetch_secondary(&format!("meetings?year={year}")).await?;
    let (meeting, at) = earliest_upcoming(&meetings, "date_start", NaiveTime::MIN, now)?;

    Some(NextRace {
        race_name: str_field_or(meeting, &["meeting_name"], "Unknown"),
        location: str_field_or(meeting, &["location"], "Unknown"),
        country: str_field_or(meeting, &["country_name"], "Unknown"),
        date: format_race_date(at),
        time_left: time_left(at, now),
    })
}

/// First listed race of `next_year`, whatever its date.
async fn next_season_opener(
    gateway: &dyn SourceGateway,
    next_year: i32,
    now: DateTime<Utc>,
) -> Option<NextRace> {
    let data = gateway.fetch_primary(&next_year.to_string()).await?;
    let first = data.get("races").and_then(Value::as_array)?.first()?;
    let race_date = str_field(first, &["date"])
        .map(str::to_string)
        .unwrap_or_else(|| format!("{next_year}-03-01T15:00:00Z"));

    Some(NextRace {
        race_name: str_field(first, &["race_name"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("{next_year} Season Opener")),
        location: str_field_or(first, &["location"], "TBD"),
        country: str_field_or(first, &["country"], "TBD"),
        date: race_date.replace('T', " ").replace('Z', " UTC"),
        time_left: time_left_raw(&race_date, now),
    })
}
