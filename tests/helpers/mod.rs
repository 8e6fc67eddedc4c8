#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use f1_dashboard::SourceGateway;
use serde_json::Value;

/// 2025-06-01 12:00 UTC, mid-season.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Serves canned bodies keyed by exact path and records every call.
#[derive(Default)]
pub struct FixtureGateway {
    primary: HashMap<String, Value>,
    secondary: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl FixtureGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, path: &str, body: Value) -> Self {
        self.primary.insert(path.to_string(), body);
        self
    }

    pub fn secondary(mut self, path: &str, body: Value) -> Self {
        self.secondary.insert(path.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls starting with `prefix`, e.g. `"secondary:"`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls().iter().any(|c| c == call)
    }
}

#[async_trait]
impl SourceGateway for FixtureGateway {
    async fn fetch_primary(&self, path: &str) -> Option<Value> {
        self.calls.lock().unwrap().push(format!("primary:{path}"));
        self.primary.get(path).filter(|v| v.is_object()).cloned()
    }

    async fn fetch_secondary(&self, path: &str) -> Option<Vec<Value>> {
        self.calls.lock().unwrap().push(format!("secondary:{path}"));
        self.secondary
            .get(path)
            .and_then(Value::as_array)
            .cloned()
    }
}

/// Gateway whose every call panics, standing in for a resolver defect.
pub struct PanickingGateway;

#[async_trait]
impl SourceGateway for PanickingGateway {
    async fn fetch_primary(&self, _path: &str) -> Option<Value> {
        panic!("upstream handler defect")
    }

    async fn fetch_secondary(&self, _path: &str) -> Option<Vec<Value>> {
        panic!("upstream handler defect")
    }
}
