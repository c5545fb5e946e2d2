//! Token source port for bearer credential acquisition.

use crate::error::NodeError;

/// Produces a bearer token for the predict endpoint.
///
/// Tokens are fetched fresh on every invocation; implementations must not
/// cache across calls. The live implementation shells out to the gcloud
/// SDK, tests substitute a fixed string.
pub trait TokenSource: Send + Sync {
    /// Return a bearer token, blocking until it is available or fails.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::ExecutableNotFound`] or
    /// [`NodeError::AuthCommandFailed`] from the live implementation.
    fn access_token(&self) -> Result<String, NodeError>;
}
