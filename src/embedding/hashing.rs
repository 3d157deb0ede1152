//! Deterministic feature-hashing encoder.
//!
//! A lightweight default [`UserEncoder`]: categorical features are hashed
//! into signed buckets, numeric features occupy reserved channels, and the
//! result is L2-normalized. Deterministic across processes so cached
//! recommendations stay comparable between runs.

use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

use super::encoder::{EncodedUser, UserEncoder};
use super::{EMBEDDING_DIM, EmbeddingVector};
use crate::error::{AffinityError, Result};
use crate::features::FeatureVector;

/// Buckets reserved for the numeric channel at the front of the vector.
const NUMERIC_BUCKETS: usize = 3;

/// Experience years are squashed to [0, 1] against this ceiling.
const EXPERIENCE_CEILING: f32 = 30.0;

/// Feature-hashing encoder with fixed seeds.
pub struct HashingEncoder {
    state: RandomState,
    model_version: String,
}

impl Default for HashingEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingEncoder {
    /// Create an encoder with the default model version.
    pub fn new() -> Self {
        Self::with_version("hashing-v1")
    }

    /// Create an encoder tagged with an explicit model version.
    pub fn with_version<S: Into<String>>(version: S) -> Self {
        Self {
            // Fixed seeds keep the bucket assignment stable across processes.
            state: RandomState::with_seeds(0x5eed_0001, 0x5eed_0002, 0x5eed_0003, 0x5eed_0004),
            model_version: version.into(),
        }
    }

    fn bucket_of(&self, token: &str) -> (usize, f32) {
        let mut hasher = self.state.build_hasher();
        token.hash(&mut hasher);
        let hashed = hasher.finish();

        let bucket = NUMERIC_BUCKETS + (hashed as usize % (EMBEDDING_DIM - NUMERIC_BUCKETS));
        let sign = if hashed & (1 << 63) == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    fn push_tokens(tokens: &mut Vec<String>, prefix: &str, values: &[String]) {
        for value in values {
            if !value.is_empty() {
                tokens.push(format!("{prefix}:{}", value.to_lowercase()));
            }
        }
    }
}

impl UserEncoder for HashingEncoder {
    fn encode_user(&self, features: &FeatureVector) -> Result<EncodedUser> {
        if !features.is_valid() {
            return Err(AffinityError::encoding(
                "feature vector carries no identity, skill, or hobby signal",
            ));
        }

        let mut tokens = Vec::new();
        if !features.location.is_empty() {
            tokens.push(format!("loc:{}", features.location.to_lowercase()));
        }
        if !features.industry.is_empty() {
            tokens.push(format!("ind:{}", features.industry.to_lowercase()));
        }
        tokens.push(format!("tier:{:?}", features.experience_tier));
        if !features.career_stage.is_empty() {
            tokens.push(format!("stage:{}", features.career_stage.to_lowercase()));
        }
        if !features.primary_intent.is_empty() {
            tokens.push(format!("intent:{}", features.primary_intent.to_lowercase()));
        }

        Self::push_tokens(&mut tokens, "skill", &features.skills);
        Self::push_tokens(&mut tokens, "hobby", &features.hobbies);
        Self::push_tokens(&mut tokens, "value", &features.values);
        Self::push_tokens(&mut tokens, "lang", &features.languages);
        Self::push_tokens(&mut tokens, "subintent", &features.sub_intents);
        Self::push_tokens(&mut tokens, "learn", &features.learn_skills);
        Self::push_tokens(&mut tokens, "teach", &features.teach_skills);
        Self::push_tokens(&mut tokens, "learnfn", &features.learn_functions);
        Self::push_tokens(&mut tokens, "teachfn", &features.teach_functions);

        let numeric = vec![
            (features.experience_years as f32 / EXPERIENCE_CEILING).min(1.0),
            features.completion_ratio as f32,
            features.verified as f32,
        ];

        Ok(EncodedUser { tokens, numeric })
    }

    fn compute_embedding(&self, encoded: &EncodedUser) -> Result<EmbeddingVector> {
        let mut values = vec![0.0f32; EMBEDDING_DIM];

        for (i, numeric) in encoded.numeric.iter().take(NUMERIC_BUCKETS).enumerate() {
            values[i] = *numeric;
        }

        for token in &encoded.tokens {
            let (bucket, sign) = self.bucket_of(token);
            values[bucket] += sign;
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut values {
                *value /= norm;
            }
        }

        EmbeddingVector::new(values)
    }

    fn model_version(&self) -> &str {
        &self.model_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;
    use crate::profile::Profile;

    fn sample_features() -> crate::features::FeatureVector {
        let mut profile = Profile::new("u-1", "Ada")
            .with_industry("fintech")
            .with_skills(vec!["rust".to_string(), "payments".to_string()])
            .with_experience_years(7.0);
        profile.location = Some("Toronto".to_string());
        profile.hobbies = vec!["climbing".to_string()];
        extract_features(&profile)
    }

    #[test]
    fn test_deterministic_embeddings() {
        let encoder = HashingEncoder::new();
        let features = sample_features();

        let a = encoder.embed(&features).unwrap();
        let b = encoder.embed(&features).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embedding_dimension_and_norm() {
        let encoder = HashingEncoder::new();
        let embedding = encoder.embed(&sample_features()).unwrap();

        assert_eq!(embedding.as_slice().len(), EMBEDDING_DIM);
        let norm: f32 = embedding.as_slice().iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_similar_profiles_score_higher() {
        let encoder = HashingEncoder::new();

        let mut near_twin = Profile::new("u-2", "Grace")
            .with_industry("fintech")
            .with_skills(vec!["rust".to_string(), "payments".to_string()])
            .with_experience_years(6.0);
        near_twin.location = Some("Toronto".to_string());
        near_twin.hobbies = vec!["climbing".to_string()];

        let mut stranger = Profile::new("u-3", "Bob").with_industry("agriculture");
        stranger.location = Some("Lisbon".to_string());
        stranger.hobbies = vec!["fishing".to_string()];

        let anchor = encoder.embed(&sample_features()).unwrap();
        let twin = encoder.embed(&extract_features(&near_twin)).unwrap();
        let far = encoder.embed(&extract_features(&stranger)).unwrap();

        assert!(anchor.cosine_similarity(&twin) > anchor.cosine_similarity(&far));
    }

    #[test]
    fn test_invalid_features_rejected() {
        let encoder = HashingEncoder::new();
        let empty = extract_features(&Profile::new("u-9", "Nobody"));
        assert!(encoder.encode_user(&empty).is_err());
    }
}
