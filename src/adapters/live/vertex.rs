//! Live HTTP client for the Vertex AI predict endpoint.

use log::info;
use reqwest::blocking::Client;

use crate::error::NodeError;
use crate::ports::{PredictClient, PredictHttpResponse};

/// Blocking predict client built on `reqwest`.
///
/// Default client settings throughout: no timeout override, no retry, one
/// attempt per call.
pub struct VertexPredictClient {
    client: Client,
}

impl VertexPredictClient {
    /// Create a new client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for VertexPredictClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictClient for VertexPredictClient {
    fn predict(
        &self,
        url: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> Result<PredictHttpResponse, NodeError> {
        info!("POST {url}");

        let response = self.client.post(url).bearer_auth(token).json(body).send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(PredictHttpResponse { status, body })
    }
}
