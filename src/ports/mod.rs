//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the node and an external
//! system. Implementations live in `src/adapters/`.

pub mod predict;
pub mod token_source;

pub use predict::{PredictClient, PredictHttpResponse};
pub use token_source::TokenSource;
