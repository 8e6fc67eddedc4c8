pub mod dashboard;
pub mod fastest_lap;
pub mod next_race;
pub mod sessions;
pub mod standings;
