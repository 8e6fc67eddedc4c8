use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde_json::{from_str, Value};
use tracing::{debug, error, warn};

use crate::utils::config::Config;

/// Read access to the two upstream providers.
///
/// Every failure mode (timeout, connection error, non-200 status, undecodable
/// or wrongly shaped body) is reported as `None`; callers treat it exactly like
/// an empty response and move on to their next tier.
#[async_trait]
pub trait SourceGateway: Send + Sync {
    /// GET `<primary>/<path>`, expecting a JSON object.
    async fn fetch_primary(&self, path: &str) -> Option<Value>;

    /// GET `<secondary>/<path>`, expecting a JSON array.
    async fn fetch_secondary(&self, path: &str) -> Option<Vec<Value>>;
}

pub struct HttpGateway {
    client: Client,
    primary_url: String,
    secondary_url: String,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(HttpGateway {
            client,
            primary_url: config.primary_api_url.clone(),
            secondary_url: config.secondary_api_url.clone(),
        })
    }

    async fn get_json(&self, provider: &str, url: String) -> Option<Value> {
        debug!(provider, %url, "fetching upstream");
        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                error!(provider, %url, "Error fetching from {provider}: {e}");
                return None;
            }
        };
        if res.status() != StatusCode::OK {
            warn!(provider, %url, status = %res.status(), "upstream returned non-200");
            return None;
        }
        let body = match res.text().await {
            Ok(body) => body,
            Err(e) => {
                error!(provider, %url, "Error reading body from {provider}: {e}");
                return None;
            }
        };
        match from_str::<Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(provider, %url, "undecodable JSON from {provider}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl SourceGateway for HttpGateway {
    async fn fetch_primary(&self, path: &str) -> Option<Value> {
        let url = format!("{}/{}", self.primary_url, path);
        match self.get_json("primary", url).await? {
            value @ Value::Object(_) => Some(value),
            _ => {
                warn!(path, "primary provider returned a non-object body");
                None
            }
        }
    }

    async fn fetch_secondary(&self, path: &str) -> Option<Vec<Value>> {
        let url = format!("{}/{}", self.secondary_url, path);
        match self.get_json("secondary", url).await? {
            Value::Array(items) => Some(items),
            _ => {
                warn!(path, "secondary provider returned a non-array body");
                None
            }
        }
    }
}
