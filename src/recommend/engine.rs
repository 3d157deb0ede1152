//! The recommendation engine.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::RecommendedProfile;
use crate::embedding::{EmbeddingVector, UserEncoder};
use crate::error::{AffinityError, Result};
use crate::storage::{
    InteractionEvent, InteractionKind, InteractionSink, ProfileStore, RecommendationCache,
};

/// Configuration for the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Default number of recommendations to return.
    pub limit: usize,
    /// Maximum number of candidate feature records to load.
    pub candidate_pool: usize,
    /// Request-scoped timeout for the whole pipeline.
    pub timeout: Duration,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            candidate_pool: 1000,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Two-tower recommendation engine.
///
/// All collaborators are injected explicitly; the engine holds no global
/// state and concurrent calls for different requesters share nothing mutable.
pub struct RecommendEngine {
    profiles: Arc<dyn ProfileStore>,
    cache: Arc<dyn RecommendationCache>,
    interactions: Arc<dyn InteractionSink>,
    encoder: Arc<dyn UserEncoder>,
    config: RecommendConfig,
}

impl RecommendEngine {
    /// Create an engine from its collaborators.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        cache: Arc<dyn RecommendationCache>,
        interactions: Arc<dyn InteractionSink>,
        encoder: Arc<dyn UserEncoder>,
        config: RecommendConfig,
    ) -> Self {
        Self {
            profiles,
            cache,
            interactions,
            encoder,
            config,
        }
    }

    /// The configured default limit.
    pub fn default_limit(&self) -> usize {
        self.config.limit
    }

    /// Rank the candidate pool for a requester and return the top `limit`
    /// candidates with their profiles, best first.
    ///
    /// A cached result for the requester short-circuits the computation with
    /// no freshness check; staleness policy belongs to the cache store.
    /// Equal-similarity candidates are ordered by candidate id ascending.
    pub async fn get_recommendations(
        &self,
        requester_id: &str,
        limit: usize,
    ) -> Result<Vec<RecommendedProfile>> {
        tokio::time::timeout(self.config.timeout, self.run_pipeline(requester_id, limit))
            .await
            .map_err(|_| {
                AffinityError::timeout(format!(
                    "recommendation pipeline for {requester_id} exceeded {:?}",
                    self.config.timeout
                ))
            })?
    }

    async fn run_pipeline(
        &self,
        requester_id: &str,
        limit: usize,
    ) -> Result<Vec<RecommendedProfile>> {
        if let Some(cached) = self.cache.get_cached_recommendations(requester_id).await? {
            debug!(
                "cache hit for {requester_id}: {} candidates, model {}",
                cached.candidate_ids.len(),
                cached.model_version
            );
            let scored: Vec<(String, f32)> = cached
                .candidate_ids
                .into_iter()
                .zip(cached.scores)
                .collect();
            return Ok(self.materialize(&scored).await);
        }

        let features = self
            .profiles
            .get_user_features(requester_id)
            .await?
            .ok_or_else(|| {
                AffinityError::user_not_found(format!("no feature record for {requester_id}"))
            })?;

        let encoded = self.encoder.encode_user(&features)?;
        let anchor = self.encoder.compute_embedding(&encoded)?;

        let candidates = self
            .profiles
            .get_all_candidate_features(requester_id, self.config.candidate_pool)
            .await?;
        if candidates.is_empty() {
            return Err(AffinityError::no_candidates(format!(
                "candidate pool empty for {requester_id}"
            )));
        }

        let mut scored = self.score_candidates(&anchor, &candidates);
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(limit);

        let results = self.materialize(&scored).await;

        let (candidate_ids, scores): (Vec<String>, Vec<f32>) = results
            .iter()
            .map(|r| (r.candidate_id.clone(), r.score))
            .unzip();
        if let Err(error) = self
            .cache
            .cache_recommendations(
                requester_id,
                candidate_ids,
                scores,
                self.encoder.model_version().to_string(),
            )
            .await
        {
            // A computed ranking is still valid when the cache write fails.
            warn!("failed to cache recommendations for {requester_id}: {error}");
        }

        Ok(results)
    }

    /// Encode every candidate and score it against the requester's embedding.
    ///
    /// Iterations are independent, so the loop runs on the rayon pool.
    /// Candidates whose encoding fails are dropped from the pool.
    fn score_candidates(
        &self,
        anchor: &EmbeddingVector,
        candidates: &[(String, crate::features::FeatureVector)],
    ) -> Vec<(String, f32)> {
        candidates
            .par_iter()
            .filter_map(|(id, features)| match self.encoder.embed(features) {
                Ok(embedding) => Some((id.clone(), anchor.cosine_similarity(&embedding))),
                Err(error) => {
                    debug!("skipping candidate {id}: {error}");
                    None
                }
            })
            .collect()
    }

    /// Fetch profiles for scored candidates, preserving order. Entries whose
    /// profile fails to load are silently dropped.
    async fn materialize(&self, scored: &[(String, f32)]) -> Vec<RecommendedProfile> {
        let fetches = scored
            .iter()
            .map(|(id, _)| self.profiles.get_profile(id));
        let profiles = join_all(fetches).await;

        scored
            .iter()
            .zip(profiles)
            .filter_map(|((id, score), profile)| match profile {
                Ok(Some(profile)) => Some(RecommendedProfile::new(id.clone(), *score, profile)),
                Ok(None) => {
                    debug!("dropping {id}: profile not found");
                    None
                }
                Err(error) => {
                    debug!("dropping {id}: profile load failed: {error}");
                    None
                }
            })
            .collect()
    }

    /// Record that the requester passed on a candidate.
    pub async fn record_pass(&self, requester_id: &str, target_id: &str) {
        self.record(requester_id, target_id, InteractionKind::Pass)
            .await;
    }

    /// Record that the requester liked a candidate.
    pub async fn record_like(&self, requester_id: &str, target_id: &str) {
        self.record(requester_id, target_id, InteractionKind::Like)
            .await;
    }

    /// Record a mutual match.
    pub async fn record_match(&self, requester_id: &str, target_id: &str) {
        self.record(requester_id, target_id, InteractionKind::Match)
            .await;
    }

    /// Fire-and-forget interaction write. Failures are logged, never
    /// propagated: recording must not block a user-facing ranking flow.
    async fn record(&self, requester_id: &str, target_id: &str, kind: InteractionKind) {
        let event = InteractionEvent::now(requester_id, target_id, kind);
        if let Err(error) = self.interactions.record_interaction(event).await {
            warn!("failed to record {kind:?} from {requester_id} to {target_id}: {error}");
        }
    }
}
