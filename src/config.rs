//! Settings file loading and environment configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::NodeError;

/// Optional settings file, TOML.
///
/// Only one setting exists today: an override path for the gcloud
/// executable, for installs where the SDK is not on `PATH`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Google Cloud SDK configuration.
    #[serde(default)]
    pub gcloud: GcloudSettings,
}

/// `[gcloud]` section of the settings file.
#[derive(Debug, Default, Deserialize)]
pub struct GcloudSettings {
    /// Path to the gcloud executable. Empty or absent means resolve from
    /// `PATH`.
    pub path: Option<String>,
}

impl Settings {
    /// Load settings from the given path, or return defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, NodeError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NodeError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| NodeError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// The configured gcloud executable path, if one is set and non-empty.
    #[must_use]
    pub fn gcloud_path(&self) -> Option<PathBuf> {
        self.gcloud.path.as_deref().filter(|p| !p.is_empty()).map(PathBuf::from)
    }
}

/// Vertex AI endpoint configuration, resolved once at node construction.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    /// Google Cloud project id.
    pub project_id: String,
    /// Vertex AI location (e.g. `us-central1`), used both as the endpoint
    /// subdomain and the resource path segment.
    pub location: String,
}

impl VertexConfig {
    /// Read `PROJECT_ID` and `LOCATION` from the process environment,
    /// loading a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ConfigurationMissing`] naming the first absent
    /// variable.
    pub fn from_env() -> Result<Self, NodeError> {
        // A missing .env file is fine; the variables may be set directly.
        let _ = dotenv::dotenv();
        Ok(Self {
            project_id: require_env("PROJECT_ID")?,
            location: require_env("LOCATION")?,
        })
    }

    /// The predict endpoint URL for the given model identifier.
    #[must_use]
    pub fn predict_url(&self, model: &str) -> String {
        format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:predict",
            location = self.location,
            project = self.project_id,
        )
    }
}

fn require_env(key: &'static str) -> Result<String, NodeError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(NodeError::ConfigurationMissing { key }),
    }
}
