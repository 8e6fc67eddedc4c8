pub mod dashboard;
pub mod race;
pub mod standings;
