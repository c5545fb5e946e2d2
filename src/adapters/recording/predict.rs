//! Recording adapter for the predict port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::NodeError;
use crate::ports::{PredictClient, PredictHttpResponse};

/// Records predict interactions while delegating to an inner client.
///
/// The bearer token is deliberately excluded from the recorded input; only
/// the URL and JSON body are captured.
pub struct RecordingPredictClient {
    inner: Box<dyn PredictClient>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPredictClient {
    /// Wrap an inner client with the given recorder.
    pub fn new(inner: Box<dyn PredictClient>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl PredictClient for RecordingPredictClient {
    fn predict(
        &self,
        url: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> Result<PredictHttpResponse, NodeError> {
        let result = self.inner.predict(url, token, body);

        let output = match &result {
            Ok(response) => {
                let inner = serde_json::to_value(response)
                    .map_err(|e| NodeError::Config(format!("failed to serialize recording: {e}")))?;
                json!({ "Ok": inner })
            }
            Err(e) => json!({ "Err": e.to_string() }),
        };

        let mut guard = self
            .recorder
            .lock()
            .map_err(|_| NodeError::Config("cassette recorder lock poisoned".into()))?;
        guard.record("predict", "predict", json!({"url": url, "body": body}), output);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticClient {
        status: u16,
        body: &'static str,
    }

    impl PredictClient for StaticClient {
        fn predict(
            &self,
            _url: &str,
            _token: &str,
            _body: &serde_json::Value,
        ) -> Result<PredictHttpResponse, NodeError> {
            Ok(PredictHttpResponse { status: self.status, body: self.body.to_string() })
        }
    }

    #[test]
    fn records_url_and_body_but_not_token() {
        let dir = std::env::temp_dir().join("imagen_node_recording_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rec.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "rec")));
        let client = RecordingPredictClient::new(
            Box::new(StaticClient { status: 200, body: "{\"predictions\":[]}" }),
            Arc::clone(&recorder),
        );

        let response = client
            .predict(
                "https://example.test/predict",
                "secret-token",
                &json!({"instances": [{"prompt": "a cat"}]}),
            )
            .unwrap();
        assert_eq!(response.status, 200);

        drop(client);
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("example.test"));
        assert!(written.contains("a cat"));
        assert!(!written.contains("secret-token"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
