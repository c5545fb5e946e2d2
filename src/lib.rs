//! Google Vertex AI Imagen node for node-graph image hosts.
//!
//! A single plugin node wrapping the Imagen `:predict` endpoint:
//! authenticate through the locally installed gcloud SDK, encode host
//! image/mask tensors to base64 PNG, issue one blocking HTTP request,
//! decode the response back into a normalized `[0,1]` RGB batch.
//!
//! External collaborators sit behind the [`ports::TokenSource`] and
//! [`ports::PredictClient`] traits; live implementations are in
//! [`adapters::live`], and [`cassette`] provides record/replay adapters
//! for network-free tests.

pub mod adapters;
pub mod cassette;
pub mod config;
pub mod error;
pub mod node;
pub mod params;
pub mod payload;
pub mod ports;
pub mod request;
pub mod tensor;

pub use config::{Settings, VertexConfig};
pub use error::NodeError;
pub use node::{descriptor, GoogleImagenNode, NodeDescriptor};
pub use params::{AspectRatio, EditMode, ModelVersion, Resolution};
pub use request::GenerationRequest;
pub use tensor::{ImageBatch, ImageBuffer, MaskBatch, MaskBuffer};
