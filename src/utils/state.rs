use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::utils::{
    config::Config,
    gateway::{HttpGateway, SourceGateway},
};

/// Source of "now" for a request.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<dyn SourceGateway>,
    pub clock: Clock,
}

impl AppState {
    pub fn init(config: Config) -> Result<Self, reqwest::Error> {
        let gateway = HttpGateway::new(&config)?;
        Ok(AppState {
            config,
            gateway: Arc::new(gateway),
            clock: Clock::System,
        })
    }

    pub fn with_gateway(config: Config, gateway: Arc<dyn SourceGateway>, clock: Clock) -> Self {
        AppState {
            config,
            gateway,
            clock,
        }
    }
}
