//! Token source backed by the gcloud SDK executable.

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::error::NodeError;
use crate::ports::TokenSource;

/// Acquires bearer tokens by running `gcloud auth print-access-token`.
///
/// The executable path defaults to `gcloud` on `PATH`; the settings file
/// can override it for installs that keep the SDK elsewhere.
pub struct GcloudTokenSource {
    path: PathBuf,
}

impl GcloudTokenSource {
    /// Create a token source using `gcloud` from `PATH`, or the given
    /// override path.
    #[must_use]
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self { path: path_override.unwrap_or_else(|| PathBuf::from("gcloud")) }
    }
}

impl TokenSource for GcloudTokenSource {
    fn access_token(&self) -> Result<String, NodeError> {
        debug!("requesting access token via {}", self.path.display());

        let output =
            Command::new(&self.path).args(["auth", "print-access-token"]).output().map_err(
                |e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        NodeError::ExecutableNotFound { path: self.path.display().to_string() }
                    } else {
                        NodeError::AuthCommandFailed { stderr: e.to_string() }
                    }
                },
            )?;

        if !output.status.success() {
            return Err(NodeError::AuthCommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
