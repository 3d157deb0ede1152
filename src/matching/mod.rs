//! Soft matching primitives.
//!
//! Pure, stateless similarity functions used by the higher scoring layers:
//! - Gaussian numeric decay for near-miss numeric matching
//! - Levenshtein-based fuzzy string similarity
//! - Exponential time decay for recency weighting

pub mod levenshtein;
pub mod soft;

pub use levenshtein::{fuzzy_similarity, fuzzy_string_match, levenshtein_distance};
pub use soft::{
    gaussian_decay, soft_experience_match, time_decay, time_weighted_experience_match,
};
