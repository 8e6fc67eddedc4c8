use std::time::Duration;

const DEFAULT_PRIMARY_API_URL: &str = "https://live.f1api.dev";
const DEFAULT_SECONDARY_API_URL: &str = "https://api.openf1.org/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub primary_api_url: String,
    pub secondary_api_url: String,
    pub upstream_timeout: Duration,
    pub bind_addr: String,
    pub log_level: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            primary_api_url: env_or("PRIMARY_API_URL", DEFAULT_PRIMARY_API_URL),
            secondary_api_url: env_or("SECONDARY_API_URL", DEFAULT_SECONDARY_API_URL),
            upstream_timeout: Duration::from_secs(
                std::env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            log_level: env_or("LOG_LEVEL", "info").to_lowercase(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            primary_api_url: DEFAULT_PRIMARY_API_URL.to_string(),
            secondary_api_url: DEFAULT_SECONDARY_API_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
