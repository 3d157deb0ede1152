//! Personalized search over the candidate pool.
//!
//! The query path that fuses the two signals: recommendation (embedding
//! similarity) scores from the orchestrator and text (zone + entity) scores
//! from the lexical layer, blended with query-adaptive weights. Both signals
//! are min-max normalized over the candidate set before fusion so the
//! weighted sum operates on comparable ranges.

pub mod engine;
pub mod normalize;

pub use engine::{SearchConfig, SearchEngine, SearchResult, SearchResults};
pub use normalize::min_max_normalize;
