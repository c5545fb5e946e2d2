//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::NodeError;

use super::format::{Cassette, Interaction};

/// Collects interactions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new() }
    }

    /// Record one interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Config`] if serialization or the write fails.
    pub fn finish(self) -> Result<PathBuf, NodeError> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette)
            .map_err(|e| NodeError::Config(format!("failed to serialize cassette: {e}")))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NodeError::Config(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, yaml)
            .map_err(|e| NodeError::Config(format!("failed to write cassette: {e}")))?;
        Ok(self.path)
    }
}
