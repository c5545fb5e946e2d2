//! Recording adapters that capture interactions to cassettes.

pub mod predict;

pub use predict::RecordingPredictClient;
