//! Record/replay infrastructure for deterministic testing.
//!
//! Predict-endpoint interactions can be captured to a YAML cassette and
//! served back later, so tests never touch the network. Bearer tokens are
//! never written to cassettes; only the request URL and JSON body are.

pub mod format;
pub mod recorder;
pub mod replayer;

use std::path::Path;

use crate::error::NodeError;

use self::format::Cassette;
use self::replayer::CassetteReplayer;

/// Load a cassette file and create a replayer over it.
///
/// # Errors
///
/// Returns [`NodeError::Config`] if the file cannot be read or parsed.
pub fn load_cassette(path: &Path) -> Result<CassetteReplayer, NodeError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| NodeError::Config(format!("failed to read cassette {}: {e}", path.display())))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| NodeError::Config(format!("failed to parse cassette {}: {e}", path.display())))?;
    Ok(CassetteReplayer::new(cassette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use super::format::Interaction;

    #[test]
    fn load_valid_cassette() {
        let dir = std::env::temp_dir().join("imagen_node_cassette_load_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.cassette.yaml");

        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            interactions: vec![Interaction {
                seq: 0,
                port: "predict".into(),
                method: "predict".into(),
                input: json!({"url": "https://example.test"}),
                output: json!({"Ok": {"status": 200, "body": "{}"}}),
            }],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let mut replayer = load_cassette(&path).unwrap();
        let output = replayer.next_output("predict", "predict").unwrap();
        assert_eq!(output["Ok"]["status"], 200);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_nonexistent_fails() {
        assert!(matches!(
            load_cassette(Path::new("/nonexistent/cassette.yaml")),
            Err(NodeError::Config(_))
        ));
    }
}
