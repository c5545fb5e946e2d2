//! Serves recorded interactions back in order.

use crate::error::NodeError;

use super::format::{Cassette, Interaction};

/// Replays interactions from a loaded cassette, strictly in recording
/// order.
///
/// The node has a single port, so the replayer keeps one cursor and checks
/// that each call matches the next recorded interaction rather than
/// maintaining per-port queues.
pub struct CassetteReplayer {
    interactions: Vec<Interaction>,
    cursor: usize,
}

impl CassetteReplayer {
    /// Create a replayer over a loaded cassette.
    #[must_use]
    pub fn new(cassette: Cassette) -> Self {
        Self { interactions: cassette.interactions, cursor: 0 }
    }

    /// Return the next recorded output for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Config`] when the cassette is exhausted or the
    /// next interaction was recorded for a different port/method.
    pub fn next_output(&mut self, port: &str, method: &str) -> Result<serde_json::Value, NodeError> {
        let Some(interaction) = self.interactions.get(self.cursor) else {
            return Err(NodeError::Config(format!(
                "cassette exhausted: all {} interactions consumed, next call was {port}::{method}",
                self.interactions.len()
            )));
        };
        if interaction.port != port || interaction.method != method {
            return Err(NodeError::Config(format!(
                "cassette mismatch at seq {}: recorded {}::{}, called {port}::{method}",
                interaction.seq, interaction.port, interaction.method
            )));
        }
        self.cursor += 1;
        Ok(interaction.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), interactions }
    }

    fn predict_interaction(seq: u64, status: u16) -> Interaction {
        Interaction {
            seq,
            port: "predict".into(),
            method: "predict".into(),
            input: json!({}),
            output: json!({"Ok": {"status": status, "body": "{}"}}),
        }
    }

    #[test]
    fn replays_in_order() {
        let mut replayer = CassetteReplayer::new(make_cassette(vec![
            predict_interaction(0, 200),
            predict_interaction(1, 500),
        ]));

        assert_eq!(replayer.next_output("predict", "predict").unwrap()["Ok"]["status"], 200);
        assert_eq!(replayer.next_output("predict", "predict").unwrap()["Ok"]["status"], 500);
    }

    #[test]
    fn exhausted_cassette_errors() {
        let mut replayer = CassetteReplayer::new(make_cassette(vec![predict_interaction(0, 200)]));
        let _ = replayer.next_output("predict", "predict").unwrap();
        assert!(matches!(
            replayer.next_output("predict", "predict"),
            Err(NodeError::Config(_))
        ));
    }

    #[test]
    fn port_mismatch_errors() {
        let mut replayer = CassetteReplayer::new(make_cassette(vec![predict_interaction(0, 200)]));
        assert!(matches!(
            replayer.next_output("token_source", "access_token"),
            Err(NodeError::Config(_))
        ));
    }
}
