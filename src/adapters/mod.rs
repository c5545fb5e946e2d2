//! Adapter implementations for port traits.
//!
//! - `live/` — gcloud subprocess and real HTTP
//! - `recording/` — record interactions to cassettes
//! - `replaying/` — replay interactions from cassettes

pub mod live;
pub mod recording;
pub mod replaying;
