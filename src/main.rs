use std::error::Error;

use axum::serve;
use f1_dashboard::{make_app, utils::logging::init_tracing, AppState, Config};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config.log_level);

    info!("Initializing application...");
    let bind_addr = config.bind_addr.clone();
    let state = AppState::init(config)?;
    info!("External clients initialized successfully");

    let app = make_app(state);

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {bind_addr}: {err}");
            return Err(err.into());
        }
    };
    info!("Listening on http://{bind_addr}");

    serve(listener, app).await?;
    Ok(())
}
