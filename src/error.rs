//! Unified error type for the Imagen node.

use thiserror::Error;

/// Errors that can occur during a node invocation.
///
/// Every variant is terminal for the current invocation; nothing is retried
/// internally. The node either returns exactly one image or one of these.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The configured gcloud executable could not be found or launched.
    #[error(
        "'{path}' not found. Ensure the Google Cloud SDK is installed and \
         the path is correct in the settings file or on PATH."
    )]
    ExecutableNotFound {
        /// The path or command name that failed to launch.
        path: String,
    },

    /// The gcloud auth subprocess exited with a non-zero status.
    #[error("failed to get gcloud auth token: {stderr}")]
    AuthCommandFailed {
        /// Standard error output from the subprocess.
        stderr: String,
    },

    /// A required environment value was not set.
    #[error("{key} not found in environment or .env file")]
    ConfigurationMissing {
        /// Name of the missing environment variable.
        key: &'static str,
    },

    /// Image editing was requested without a mask input.
    #[error(
        "image editing (inpainting/outpainting) requires a mask; \
         connect a mask to the 'mask' input"
    )]
    MissingMask,

    /// The HTTP request failed at the network level or returned a non-2xx
    /// status.
    #[error("API request failed: {message}")]
    Transport {
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
        /// Response body text or the underlying network error.
        message: String,
    },

    /// The API response could not be parsed into a generated image.
    #[error("failed to parse API response: {0}")]
    MalformedResponse(String),

    /// A node input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The settings file exists but could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for NodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
