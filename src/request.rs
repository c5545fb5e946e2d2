//! The node's input bundle and its validation rules.

use crate::error::NodeError;
use crate::params::{AspectRatio, EditMode, ModelVersion, Resolution};
use crate::tensor::{ImageBatch, MaskBatch};

/// One generation request, assembled from the host node's inputs.
///
/// Seed and resolution are part of the node contract but are not forwarded
/// to the endpoint; they are carried here so the host can wire them without
/// the node rejecting the input.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Text prompt describing the desired image.
    pub prompt: String,
    /// Which Imagen model to call.
    pub model_version: ModelVersion,
    /// Output aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Resolution tier selected on the node.
    pub resolution: Resolution,
    /// Random seed selected on the node.
    pub seed: u64,
    /// Source image for editing, if connected.
    pub image: Option<ImageBatch>,
    /// Mask for editing, if connected.
    pub mask: Option<MaskBatch>,
    /// Edit behavior when a source image is present.
    pub edit_mode: EditMode,
}

impl GenerationRequest {
    /// Create a text-to-image request with default optional inputs.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        model_version: ModelVersion,
        aspect_ratio: AspectRatio,
        resolution: Resolution,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model_version,
            aspect_ratio,
            resolution,
            seed: 0,
            image: None,
            mask: None,
            edit_mode: EditMode::default(),
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Attach a source image, switching the request to editing.
    #[must_use]
    pub fn with_image(mut self, image: ImageBatch) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach an edit mask.
    #[must_use]
    pub fn with_mask(mut self, mask: MaskBatch) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the edit mode.
    #[must_use]
    pub fn with_edit_mode(mut self, edit_mode: EditMode) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    /// Whether this request edits an existing image rather than generating
    /// one from scratch.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.image.is_some()
    }

    /// Check the image/mask pairing invariant.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingMask`] when an image is connected without
    /// a mask, and [`NodeError::InvalidInput`] when a mask is connected
    /// without an image.
    pub fn validate(&self) -> Result<(), NodeError> {
        match (&self.image, &self.mask) {
            (Some(_), None) => Err(NodeError::MissingMask),
            (None, Some(_)) => Err(NodeError::InvalidInput(
                "a mask is connected but no image; connect the image to edit".into(),
            )),
            _ => Ok(()),
        }
    }
}
