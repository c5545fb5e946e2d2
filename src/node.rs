//! The Google Imagen node: input declaration and the invocation flow.

use base64::Engine;
use log::{debug, info};
use serde::Deserialize;

use crate::adapters::live::{GcloudTokenSource, VertexPredictClient};
use crate::config::{Settings, VertexConfig};
use crate::error::NodeError;
use crate::params::{AspectRatio, ModelVersion};
use crate::payload::build_payload;
use crate::ports::{PredictClient, TokenSource};
use crate::request::GenerationRequest;
use crate::tensor::{ImageBatch, ImageBuffer};

/// How a declared input is edited on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Multiline text field.
    MultilineText,
    /// Dropdown over a fixed set of values.
    Choice(&'static [&'static str]),
    /// Unsigned integer with a default.
    UnsignedInt {
        /// Value used when the host leaves the input unwired.
        default: u64,
    },
    /// Image socket.
    Image,
    /// Mask socket.
    Mask,
}

/// One declared node input.
#[derive(Debug, Clone, Copy)]
pub struct InputDecl {
    /// Input name as shown on the node.
    pub name: &'static str,
    /// Editor kind.
    pub kind: InputKind,
}

/// Static node registration data for the host.
#[derive(Debug, Clone, Copy)]
pub struct NodeDescriptor {
    /// Display name in the host's node menu.
    pub display_name: &'static str,
    /// Menu category path.
    pub category: &'static str,
    /// Inputs that must be wired.
    pub required: &'static [InputDecl],
    /// Inputs that may be left unwired.
    pub optional: &'static [InputDecl],
}

const MODEL_VERSIONS: &[&str] = &["imagen-4.0-fast-generate-001", "imagen-4.0-ultra-generate-001"];
const ASPECT_RATIOS: &[&str] = &["1:1", "9:16", "16:9", "4:3", "3:4"];
const RESOLUTIONS: &[&str] = &["standard", "high"];
const EDIT_MODES: &[&str] = &["inpainting", "outpainting"];

/// The node's registration descriptor.
#[must_use]
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        display_name: "Google Imagen",
        category: "Ru4ls/Imagen",
        required: &[
            InputDecl { name: "prompt", kind: InputKind::MultilineText },
            InputDecl { name: "model_version", kind: InputKind::Choice(MODEL_VERSIONS) },
            InputDecl { name: "aspect_ratio", kind: InputKind::Choice(ASPECT_RATIOS) },
            InputDecl { name: "resolution", kind: InputKind::Choice(RESOLUTIONS) },
        ],
        optional: &[
            InputDecl { name: "seed", kind: InputKind::UnsignedInt { default: 0 } },
            InputDecl { name: "image", kind: InputKind::Image },
            InputDecl { name: "mask", kind: InputKind::Mask },
            InputDecl { name: "edit_mode", kind: InputKind::Choice(EDIT_MODES) },
        ],
    }
}

/// The Imagen node: one invocation is one predict call.
///
/// Collaborators are injected behind the [`TokenSource`] and
/// [`PredictClient`] ports so tests never shell out or touch the network.
/// The node holds no mutable state; invocations are independent.
pub struct GoogleImagenNode {
    config: VertexConfig,
    token_source: Box<dyn TokenSource>,
    client: Box<dyn PredictClient>,
}

impl GoogleImagenNode {
    /// Create a node with live collaborators: gcloud for tokens (using the
    /// settings-file path override, if any) and a blocking HTTP client.
    #[must_use]
    pub fn new(config: VertexConfig, settings: &Settings) -> Self {
        Self {
            config,
            token_source: Box::new(GcloudTokenSource::new(settings.gcloud_path())),
            client: Box::new(VertexPredictClient::new()),
        }
    }

    /// Create a node with injected collaborators.
    #[must_use]
    pub fn with_ports(
        config: VertexConfig,
        token_source: Box<dyn TokenSource>,
        client: Box<dyn PredictClient>,
    ) -> Self {
        Self { config, token_source, client }
    }

    /// Run one generation: validate, authenticate, call the predict
    /// endpoint, decode the first prediction into a host image batch.
    ///
    /// # Errors
    ///
    /// Any [`NodeError`]; every failure is terminal for this invocation.
    pub fn generate_image(&self, request: &GenerationRequest) -> Result<ImageBatch, NodeError> {
        request.validate()?;
        let payload = build_payload(request)?;
        debug!(
            "built {} payload for model {}",
            if request.is_edit() { "edit" } else { "generate" },
            request.model_version
        );

        let token = self.token_source.access_token()?;
        let url = self.config.predict_url(request.model_version.as_str());
        info!("calling predict endpoint for model {}", request.model_version);

        let response = self.client.predict(&url, &token, &payload)?;
        if !response.is_success() {
            return Err(NodeError::Transport {
                status: Some(response.status),
                message: response.body,
            });
        }

        decode_response(&response.body)
    }
}

/// Validated node-input strings, as the host hands them over.
///
/// Convenience for hosts that deliver inputs untyped; parses the enum
/// dropdowns and assembles a [`GenerationRequest`].
///
/// # Errors
///
/// Returns [`NodeError::InvalidInput`] when any dropdown value is not one
/// of the declared options.
pub fn parse_inputs(
    prompt: &str,
    model_version: &str,
    aspect_ratio: &str,
    resolution: &str,
) -> Result<GenerationRequest, NodeError> {
    Ok(GenerationRequest::new(
        prompt,
        model_version.parse::<ModelVersion>().map_err(NodeError::InvalidInput)?,
        aspect_ratio.parse::<AspectRatio>().map_err(NodeError::InvalidInput)?,
        resolution.parse().map_err(NodeError::InvalidInput)?,
    ))
}

// --- Predict endpoint response types ---

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

/// Decode a 2xx predict response body into a single-item image batch.
fn decode_response(body: &str) -> Result<ImageBatch, NodeError> {
    let parsed: PredictResponse = serde_json::from_str(body)
        .map_err(|e| NodeError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let first = parsed
        .predictions
        .first()
        .ok_or_else(|| NodeError::MalformedResponse("no predictions in API response".into()))?;
    let encoded = first.bytes_base64_encoded.as_deref().ok_or_else(|| {
        NodeError::MalformedResponse("prediction has no bytesBase64Encoded field".into())
    })?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| NodeError::MalformedResponse(format!("invalid base64: {e}")))?;

    Ok(ImageBatch::single(ImageBuffer::from_encoded(&bytes)?))
}
