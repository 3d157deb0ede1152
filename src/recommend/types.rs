//! Result types for the recommendation pipeline.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// One ranked recommendation: a candidate, their similarity score, and the
/// materialized profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedProfile {
    /// Candidate id.
    pub candidate_id: String,
    /// Cosine similarity against the requester, in `[-1, 1]`.
    pub score: f32,
    /// The candidate's full profile.
    pub profile: Profile,
}

impl RecommendedProfile {
    /// Create a new recommendation entry.
    pub fn new<S: Into<String>>(candidate_id: S, score: f32, profile: Profile) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            score,
            profile,
        }
    }
}
