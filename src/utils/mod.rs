pub mod config;
pub mod drivers;
pub mod gateway;
pub mod logging;
pub mod race_utils;
pub mod state;
