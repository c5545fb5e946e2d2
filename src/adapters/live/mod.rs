//! Live adapters that talk to real external systems.

pub mod gcloud;
pub mod vertex;

pub use gcloud::GcloudTokenSource;
pub use vertex::VertexPredictClient;
