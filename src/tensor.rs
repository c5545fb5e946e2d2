//! Host-native raster buffers and their wire-format conversions.
//!
//! The host exchanges images as normalized `f32` tensors in `[0,1]`,
//! logically shaped `[height, width, 3]` (or `[height, width]` for masks)
//! and wrapped in a single-item batch at the node boundary. The predict
//! endpoint exchanges 8-bit PNG bytes in base64. This module owns both
//! directions of that conversion.

use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::NodeError;

/// An in-memory RGB raster with normalized `[0,1]` channel values.
///
/// Pixel data is interleaved row-major: `data[(y * width + x) * 3 + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    height: u32,
    width: u32,
    data: Vec<f32>,
}

impl ImageBuffer {
    /// Create a buffer from interleaved RGB pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if `data.len()` is not
    /// `height * width * 3`.
    pub fn from_rgb(height: u32, width: u32, data: Vec<f32>) -> Result<Self, NodeError> {
        let expected = height as usize * width as usize * 3;
        if data.len() != expected {
            return Err(NodeError::InvalidInput(format!(
                "image buffer of {}x{} requires {expected} values, got {}",
                height,
                width,
                data.len()
            )));
        }
        Ok(Self { height, width, data })
    }

    /// Raster height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raster width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The interleaved normalized pixel values.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Quantize to 8-bit and encode as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if PNG encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>, NodeError> {
        let bytes: Vec<u8> = self.data.iter().map(|&v| quantize(v)).collect();
        let raster = RgbImage::from_raw(self.width, self.height, bytes).ok_or_else(|| {
            NodeError::InvalidInput("image buffer dimensions do not match pixel data".into())
        })?;
        encode_png(&DynamicImage::ImageRgb8(raster))
    }

    /// Encode as PNG and then standard base64, the predict wire form.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if PNG encoding fails.
    pub fn to_base64_png(&self) -> Result<String, NodeError> {
        Ok(base64::engine::general_purpose::STANDARD.encode(self.to_png()?))
    }

    /// Decode encoded image bytes (any format the `image` crate knows),
    /// normalize to RGB and `[0,1]` values.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MalformedResponse`] if the bytes do not decode.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, NodeError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| NodeError::MalformedResponse(format!("failed to decode image: {e}")))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = rgb.into_raw().into_iter().map(|v| f32::from(v) / 255.0).collect();
        Ok(Self { height, width, data })
    }
}

/// A single-channel grayscale raster with normalized `[0,1]` values.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskBuffer {
    height: u32,
    width: u32,
    data: Vec<f32>,
}

impl MaskBuffer {
    /// Create a mask from row-major grayscale pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if `data.len()` is not
    /// `height * width`.
    pub fn from_luma(height: u32, width: u32, data: Vec<f32>) -> Result<Self, NodeError> {
        let expected = height as usize * width as usize;
        if data.len() != expected {
            return Err(NodeError::InvalidInput(format!(
                "mask buffer of {}x{} requires {expected} values, got {}",
                height,
                width,
                data.len()
            )));
        }
        Ok(Self { height, width, data })
    }

    /// Raster height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raster width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The normalized mask values.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Quantize to 8-bit grayscale and encode as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if PNG encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>, NodeError> {
        let bytes: Vec<u8> = self.data.iter().map(|&v| quantize(v)).collect();
        let raster = GrayImage::from_raw(self.width, self.height, bytes).ok_or_else(|| {
            NodeError::InvalidInput("mask buffer dimensions do not match pixel data".into())
        })?;
        encode_png(&DynamicImage::ImageLuma8(raster))
    }

    /// Encode as PNG and then standard base64.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] if PNG encoding fails.
    pub fn to_base64_png(&self) -> Result<String, NodeError> {
        Ok(base64::engine::general_purpose::STANDARD.encode(self.to_png()?))
    }
}

/// Single-item image batch, the host-boundary representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBatch {
    items: Vec<ImageBuffer>,
}

impl ImageBatch {
    /// Wrap one image in a batch.
    #[must_use]
    pub fn single(image: ImageBuffer) -> Self {
        Self { items: vec![image] }
    }

    /// The first image in the batch, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ImageBuffer> {
        self.items.first()
    }

    /// Number of images in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Single-item mask batch, the host-boundary representation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskBatch {
    items: Vec<MaskBuffer>,
}

impl MaskBatch {
    /// Wrap one mask in a batch.
    #[must_use]
    pub fn single(mask: MaskBuffer) -> Self {
        Self { items: vec![mask] }
    }

    /// The first mask in the batch, if any.
    #[must_use]
    pub fn first(&self) -> Option<&MaskBuffer> {
        self.items.first()
    }

    /// Number of masks in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Map a normalized value to an 8-bit channel, clamping out-of-range input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, NodeError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| NodeError::InvalidInput(format!("failed to encode PNG: {e}")))?;
    Ok(buf.into_inner())
}
