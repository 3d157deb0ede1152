//! Recommendation orchestration.
//!
//! The end-to-end two-tower pipeline: cache lookup, feature load, embedding
//! encode, per-candidate cosine similarity, top-K selection, profile
//! materialization, cache write, and interaction-event recording.

pub mod engine;
pub mod types;

pub use engine::{RecommendConfig, RecommendEngine};
pub use types::RecommendedProfile;
