//! Builds the predict endpoint's JSON request body.

use crate::error::NodeError;
use crate::request::GenerationRequest;

/// Build the JSON body for a request.
///
/// Two shapes exist. Text-to-image:
///
/// ```json
/// {"instances": [{"prompt": "…"}],
///  "parameters": {"sampleCount": 1, "aspectRatio": "1:1"}}
/// ```
///
/// Editing, when a source image is connected:
///
/// ```json
/// {"instances": [{"prompt": "…",
///                 "image": {"bytesBase64Encoded": "…"},
///                 "edit_mode": "inpainting",
///                 "mask": {"image": {"bytesBase64Encoded": "…"}}}],
///  "parameters": {}}
/// ```
///
/// # Errors
///
/// Returns [`NodeError::MissingMask`] for an image without a mask,
/// [`NodeError::InvalidInput`] for a mask without an image or an empty
/// image/mask batch, and propagates PNG encoding failures.
pub fn build_payload(request: &GenerationRequest) -> Result<serde_json::Value, NodeError> {
    request.validate()?;

    let Some(image_batch) = &request.image else {
        return Ok(serde_json::json!({
            "instances": [
                {"prompt": request.prompt}
            ],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": request.aspect_ratio.as_str(),
            }
        }));
    };

    let image = image_batch
        .first()
        .ok_or_else(|| NodeError::InvalidInput("image batch is empty".into()))?;
    // validate() guarantees the mask is present here.
    let mask = request
        .mask
        .as_ref()
        .and_then(crate::tensor::MaskBatch::first)
        .ok_or_else(|| NodeError::InvalidInput("mask batch is empty".into()))?;

    Ok(serde_json::json!({
        "instances": [
            {
                "prompt": request.prompt,
                "image": {"bytesBase64Encoded": image.to_base64_png()?},
                "edit_mode": request.edit_mode.as_str(),
                "mask": {"image": {"bytesBase64Encoded": mask.to_base64_png()?}},
            }
        ],
        "parameters": {}
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AspectRatio, EditMode, ModelVersion, Resolution};
    use crate::tensor::{ImageBatch, ImageBuffer, MaskBatch, MaskBuffer};

    fn base_request() -> GenerationRequest {
        GenerationRequest::new(
            "a red fox in snow",
            ModelVersion::Imagen4Ultra,
            AspectRatio::Landscape16x9,
            Resolution::High,
        )
    }

    fn tiny_image() -> ImageBatch {
        ImageBatch::single(ImageBuffer::from_rgb(2, 2, vec![0.5; 12]).unwrap())
    }

    fn tiny_mask() -> MaskBatch {
        MaskBatch::single(MaskBuffer::from_luma(2, 2, vec![1.0; 4]).unwrap())
    }

    #[test]
    fn generate_payload_shape() {
        let payload = build_payload(&base_request()).unwrap();

        assert_eq!(payload["instances"][0]["prompt"], "a red fox in snow");
        assert_eq!(payload["parameters"]["sampleCount"], 1);
        assert_eq!(payload["parameters"]["aspectRatio"], "16:9");
        // No editing fields in the text-to-image shape.
        assert!(payload["instances"][0].get("image").is_none());
        assert!(payload["instances"][0].get("mask").is_none());
        assert!(payload["instances"][0].get("edit_mode").is_none());
    }

    #[test]
    fn generate_payload_ignores_seed_and_resolution() {
        let payload = build_payload(&base_request().with_seed(42)).unwrap();
        assert!(payload["parameters"].get("seed").is_none());
        assert!(payload["parameters"].get("resolution").is_none());
    }

    #[test]
    fn edit_payload_shape() {
        let request = base_request()
            .with_image(tiny_image())
            .with_mask(tiny_mask())
            .with_edit_mode(EditMode::Outpainting);
        let payload = build_payload(&request).unwrap();

        let instance = &payload["instances"][0];
        assert_eq!(instance["prompt"], "a red fox in snow");
        assert_eq!(instance["edit_mode"], "outpainting");
        assert!(instance["image"]["bytesBase64Encoded"].is_string());
        assert!(instance["mask"]["image"]["bytesBase64Encoded"].is_string());
        assert_eq!(payload["parameters"], serde_json::json!({}));
    }

    #[test]
    fn edit_payload_base64_is_png() {
        use base64::Engine;

        let request = base_request().with_image(tiny_image()).with_mask(tiny_mask());
        let payload = build_payload(&request).unwrap();

        let b64 = payload["instances"][0]["image"]["bytesBase64Encoded"].as_str().unwrap();
        let bytes = base64::engine::general_purpose::STANDARD.decode(b64).unwrap();
        assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn image_without_mask_fails_before_encoding() {
        let request = base_request().with_image(tiny_image());
        assert!(matches!(build_payload(&request), Err(NodeError::MissingMask)));
    }

    #[test]
    fn mask_without_image_fails() {
        let request = base_request().with_mask(tiny_mask());
        assert!(matches!(build_payload(&request), Err(NodeError::InvalidInput(_))));
    }
}
