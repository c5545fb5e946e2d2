//! Replaying adapters that serve recorded interactions from cassettes.

pub mod predict;

pub use predict::ReplayingPredictClient;
