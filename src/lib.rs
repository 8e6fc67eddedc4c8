pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use routes::make_app;
pub use utils::{config::Config, gateway::SourceGateway, state::AppState};
