//! The personalized search engine.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::normalize::min_max_normalize;
use crate::error::Result;
use crate::fusion::{QueryDifficulty, WeightPair, adjust_weights};
use crate::lexical::{entity_score, zone_score};
use crate::profile::Profile;
use crate::query::ParsedQuery;
use crate::recommend::RecommendEngine;

/// Configuration for personalized search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default number of results to return.
    pub limit: usize,
    /// How many recommendation candidates to re-rank lexically.
    pub rerank_pool: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            rerank_pool: 100,
        }
    }
}

/// One fused search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Candidate id.
    pub candidate_id: String,
    /// Final fused ranking score.
    pub fused_score: f64,
    /// Raw embedding-similarity score.
    pub recommendation_score: f32,
    /// Raw text score (zone + entity).
    pub text_score: f64,
    /// The candidate's profile.
    pub profile: Profile,
}

/// Fused search results with the weights and difficulty that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Ranked results, best first.
    pub results: Vec<SearchResult>,
    /// The weight split applied during fusion.
    pub weights: WeightPair,
    /// Descriptive difficulty tag for the query.
    pub difficulty: QueryDifficulty,
}

/// Search engine blending recommendation and text signals.
pub struct SearchEngine {
    recommend: Arc<RecommendEngine>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create a search engine on top of a recommendation engine.
    pub fn new(recommend: Arc<RecommendEngine>, config: SearchConfig) -> Self {
        Self { recommend, config }
    }

    /// Run a personalized search for a requester.
    ///
    /// Obtains the recommendation ranking, scores each returned profile
    /// lexically against the query, min-max normalizes both signals over the
    /// candidate set, and fuses them with query-adaptive weights. Ties on the
    /// fused score break by candidate id ascending.
    pub async fn search(
        &self,
        requester_id: &str,
        query: &ParsedQuery,
        limit: usize,
    ) -> Result<SearchResults> {
        let pool = self.config.rerank_pool.max(limit);
        let recommendations = self.recommend.get_recommendations(requester_id, pool).await?;

        let weights = adjust_weights(query);
        let difficulty = QueryDifficulty::classify(query);
        debug!(
            "search for {requester_id}: {} candidates, weights ({:.2}, {:.2}), {difficulty:?}",
            recommendations.len(),
            weights.recommendation,
            weights.text,
        );

        let rec_scores: Vec<f64> = recommendations.iter().map(|r| r.score as f64).collect();
        let text_scores: Vec<f64> = recommendations
            .iter()
            .map(|r| zone_score(&r.profile, &query.tokens) + entity_score(&r.profile, &query.entities))
            .collect();

        let rec_normalized = min_max_normalize(&rec_scores);
        let text_normalized = min_max_normalize(&text_scores);

        let mut results: Vec<SearchResult> = recommendations
            .into_iter()
            .zip(rec_normalized.into_iter().zip(text_normalized))
            .zip(text_scores)
            .map(|((recommendation, (rec_n, text_n)), text_raw)| SearchResult {
                candidate_id: recommendation.candidate_id,
                fused_score: weights.fuse(rec_n, text_n),
                recommendation_score: recommendation.score,
                text_score: text_raw,
                profile: recommendation.profile,
            })
            .collect();

        results.sort_by(|a, b| {
            b.fused_score
                .partial_cmp(&a.fused_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        results.truncate(limit);

        Ok(SearchResults {
            results,
            weights,
            difficulty,
        })
    }

    /// The configured default limit.
    pub fn default_limit(&self) -> usize {
        self.config.limit
    }
}
