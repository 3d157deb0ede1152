//! Query-adaptive score fusion.
//!
//! Inspects the shape of a parsed query (token count, entity richness,
//! numeric mentions, domain vocabulary, concept tags) and derives the weight
//! split between the recommendation (embedding) score and the lexical text
//! score. The fused score is a plain weighted sum; both inputs must already
//! be scaled to comparable ranges by the caller.

use serde::{Deserialize, Serialize};

use crate::query::ParsedQuery;

/// Prior recommendation weight before any rule fires.
const PRIOR_RECOMMENDATION_WEIGHT: f64 = 0.3;
/// Lower clamp bound for the recommendation weight.
const MIN_RECOMMENDATION_WEIGHT: f64 = 0.1;
/// Upper clamp bound for the recommendation weight.
const MAX_RECOMMENDATION_WEIGHT: f64 = 0.9;

/// Entity count at which a query is considered entity-rich.
const ENTITY_RICH_THRESHOLD: usize = 3;

/// Domain vocabulary that signals a text-heavy people query.
const DOMAIN_TERMS: &[&str] = &[
    "alumni",
    "alum",
    "founder",
    "cofounder",
    "co-founder",
    "mentor",
    "mentorship",
    "startup",
    "investor",
    "batchmate",
];

/// Weight split between the recommendation score and the text score.
///
/// Both components stay in `[0.1, 0.9]` and always sum to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    /// Weight applied to the embedding-similarity signal.
    pub recommendation: f64,
    /// Weight applied to the lexical text signal.
    pub text: f64,
}

impl WeightPair {
    fn new(recommendation: f64, text: f64) -> Self {
        Self {
            recommendation,
            text,
        }
    }

    /// Move `delta` from the recommendation side to the text side.
    fn shift_toward_text(&mut self, delta: f64) {
        self.recommendation -= delta;
        self.text += delta;
    }

    /// Fuse a recommendation score and a text score into one ranking value.
    ///
    /// Inputs are expected to be pre-scaled to comparable ranges; this is not
    /// enforced here.
    pub fn fuse(&self, recommendation_score: f64, text_score: f64) -> f64 {
        self.recommendation * recommendation_score + self.text * text_score
    }
}

impl Default for WeightPair {
    fn default() -> Self {
        Self::new(
            PRIOR_RECOMMENDATION_WEIGHT,
            1.0 - PRIOR_RECOMMENDATION_WEIGHT,
        )
    }
}

/// Derive the fusion weights for a query.
///
/// Starts from the prior `(0.3, 0.7)` and applies ordered adjustments:
///
/// 1. Token count: `<= 2` tokens resets to `(0.5, 0.5)`; `>= 6` resets to
///    `(0.2, 0.8)`.
/// 2. Entity-rich queries (3+ named entities) shift 0.1 toward text.
/// 3. A numeric mention shifts 0.1 toward text.
/// 4. Domain vocabulary among the tokens shifts 0.05 toward text.
/// 5. Non-empty concept tags shift 0.05 toward text.
///
/// Shifts are symmetric: the text side gains exactly what the recommendation
/// side loses. The pair is then normalized to sum 1.0 and the recommendation
/// weight clamped to `[0.1, 0.9]` as the final step, so the clamp may
/// override the cumulative rule adjustments for extreme inputs.
pub fn adjust_weights(query: &ParsedQuery) -> WeightPair {
    let mut weights = WeightPair::default();

    match query.tokens.len() {
        0..=2 => weights = WeightPair::new(0.5, 0.5),
        6.. => weights = WeightPair::new(0.2, 0.8),
        _ => {}
    }

    if query.entities.named_count() >= ENTITY_RICH_THRESHOLD {
        weights.shift_toward_text(0.1);
    }

    if !query.entities.numeric_mentions.is_empty() {
        weights.shift_toward_text(0.1);
    }

    if query
        .tokens
        .iter()
        .any(|token| DOMAIN_TERMS.contains(&token.to_lowercase().as_str()))
    {
        weights.shift_toward_text(0.05);
    }

    if !query.concept_tags.is_empty() {
        weights.shift_toward_text(0.05);
    }

    // Normalize, then clamp. Clamp order is deliberate: it runs last and may
    // reintroduce a small deviation from the rule totals.
    let sum = weights.recommendation + weights.text;
    if sum > 0.0 {
        weights.recommendation /= sum;
    }
    weights.recommendation = weights
        .recommendation
        .clamp(MIN_RECOMMENDATION_WEIGHT, MAX_RECOMMENDATION_WEIGHT);
    weights.text = 1.0 - weights.recommendation;

    weights
}

/// Descriptive shape statistics for a query. Not an input to the weighting
/// rules; exposed for observability and downstream heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryComplexity {
    pub token_count: usize,
    pub entity_count: usize,
    pub has_numeric_mention: bool,
    pub concept_tag_count: usize,
}

impl QueryComplexity {
    /// Measure a query's shape.
    pub fn measure(query: &ParsedQuery) -> Self {
        Self {
            token_count: query.tokens.len(),
            entity_count: query.entities.named_count(),
            has_numeric_mention: !query.entities.numeric_mentions.is_empty(),
            concept_tag_count: query.concept_tags.len(),
        }
    }
}

/// Coarse difficulty tag for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryDifficulty {
    /// At most 2 tokens, or no entities at all.
    Simple,
    /// At most 5 tokens and at most 2 entities.
    Moderate,
    /// Everything else.
    Complex,
}

impl QueryDifficulty {
    /// Classify a query.
    pub fn classify(query: &ParsedQuery) -> Self {
        let tokens = query.tokens.len();
        let entities = query.entities.named_count();

        if tokens <= 2 || entities == 0 {
            QueryDifficulty::Simple
        } else if tokens <= 5 && entities <= 2 {
            QueryDifficulty::Moderate
        } else {
            QueryDifficulty::Complex
        }
    }
}
