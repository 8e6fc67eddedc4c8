pub mod dashboard;
pub mod error;
pub mod race;
pub mod resolved;
pub mod standings;
pub mod telemetry;
