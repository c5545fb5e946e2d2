//! Replaying adapter for the predict port.

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::NodeError;
use crate::ports::{PredictClient, PredictHttpResponse};

/// Serves recorded predict results from a cassette, never touching the
/// network.
pub struct ReplayingPredictClient {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingPredictClient {
    /// Create a replaying client over the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl PredictClient for ReplayingPredictClient {
    fn predict(
        &self,
        _url: &str,
        _token: &str,
        _body: &serde_json::Value,
    ) -> Result<PredictHttpResponse, NodeError> {
        let output = {
            let mut guard = self
                .replayer
                .lock()
                .map_err(|_| NodeError::Config("cassette replayer lock poisoned".into()))?;
            guard.next_output("predict", "predict")?
        };

        if let Some(err) = output.get("Err").and_then(serde_json::Value::as_str) {
            return Err(NodeError::Transport { status: None, message: err.to_string() });
        }
        let ok = output
            .get("Ok")
            .ok_or_else(|| NodeError::Config("cassette output has neither Ok nor Err".into()))?;
        serde_json::from_value(ok.clone())
            .map_err(|e| NodeError::Config(format!("cassette output does not deserialize: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn replayer_for(output: serde_json::Value) -> ReplayingPredictClient {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            interactions: vec![Interaction {
                seq: 0,
                port: "predict".into(),
                method: "predict".into(),
                input: json!({}),
                output,
            }],
        };
        ReplayingPredictClient::new(Arc::new(Mutex::new(CassetteReplayer::new(cassette))))
    }

    #[test]
    fn replays_ok_response() {
        let client = replayer_for(json!({"Ok": {"status": 200, "body": "{\"predictions\":[]}"}}));
        let response = client.predict("ignored", "ignored", &json!({})).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{\"predictions\":[]}");
    }

    #[test]
    fn replays_err_as_transport() {
        let client = replayer_for(json!({"Err": "connection refused"}));
        assert!(matches!(
            client.predict("ignored", "ignored", &json!({})),
            Err(NodeError::Transport { status: None, .. })
        ));
    }

    #[test]
    fn malformed_cassette_output_errors() {
        let client = replayer_for(json!({"unexpected": true}));
        assert!(matches!(
            client.predict("ignored", "ignored", &json!({})),
            Err(NodeError::Config(_))
        ));
    }
}
