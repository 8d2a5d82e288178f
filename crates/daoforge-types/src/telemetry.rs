use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single product analytics event. Delivery is best effort; nothing in
/// the wizard ever waits on one of these.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub props: HashMap<String, String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub recorded_at: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn new(name: &str, props: HashMap<String, String>) -> Self {
        Self {
            name: name.to_string(),
            props,
            recorded_at: Utc::now(),
        }
    }
}
