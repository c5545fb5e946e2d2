//! On-disk cassette schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of predict-endpoint interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable cassette name.
    pub name: String,
    /// When the recording was made.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in recording order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the recording, starting at 0.
    pub seq: u64,
    /// Port name (`"predict"`).
    pub port: String,
    /// Method name on the port.
    pub method: String,
    /// Serialized call input. Never contains credentials.
    pub input: serde_json::Value,
    /// Serialized call result using the `{"Ok": …}` / `{"Err": "…"}`
    /// convention.
    pub output: serde_json::Value,
}
