//! Predict endpoint port for the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// Raw HTTP response from the predict endpoint, before any parsing.
///
/// Non-2xx statuses are returned here rather than as errors so the caller
/// can surface the response body text; only network-level failures are
/// `Err`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictHttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl PredictHttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one blocking POST to a predict endpoint.
pub trait PredictClient: Send + Sync {
    /// POST `body` as JSON to `url` with a bearer `token`, blocking until
    /// the response arrives. Exactly one attempt; no retry.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Transport`] on network-level failure.
    fn predict(
        &self,
        url: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> Result<PredictHttpResponse, NodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(PredictHttpResponse { status: 200, body: String::new() }.is_success());
        assert!(PredictHttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!PredictHttpResponse { status: 199, body: String::new() }.is_success());
        assert!(!PredictHttpResponse { status: 403, body: String::new() }.is_success());
        assert!(!PredictHttpResponse { status: 500, body: String::new() }.is_success());
    }

    #[test]
    fn response_serialization_round_trip() {
        let response = PredictHttpResponse { status: 200, body: "{\"predictions\":[]}".into() };
        let json = serde_json::to_string(&response).unwrap();
        let back: PredictHttpResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, 200);
        assert_eq!(back.body, response.body);
    }
}
