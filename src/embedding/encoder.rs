//! The pluggable user-encoder trait.

use serde::{Deserialize, Serialize};

use super::EmbeddingVector;
use crate::error::Result;
use crate::features::FeatureVector;

/// Intermediate representation of a user between feature extraction and the
/// final embedding.
///
/// Opaque to the ranking pipeline; encoders are free to interpret the token
/// and numeric channels however their model expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedUser {
    /// Field-prefixed categorical tokens.
    pub tokens: Vec<String>,
    /// Numeric feature channel.
    pub numeric: Vec<f32>,
}

/// A pluggable encoder from feature vectors to embeddings.
///
/// Implementations must be pure with respect to a given model version:
/// the same features always produce the same embedding.
pub trait UserEncoder: Send + Sync {
    /// Encode a feature vector into the model's internal representation.
    fn encode_user(&self, features: &FeatureVector) -> Result<EncodedUser>;

    /// Compute the final embedding from an internal representation.
    fn compute_embedding(&self, encoded: &EncodedUser) -> Result<EmbeddingVector>;

    /// Version tag written alongside cached recommendations.
    fn model_version(&self) -> &str;

    /// Convenience: encode features straight to an embedding.
    fn embed(&self, features: &FeatureVector) -> Result<EmbeddingVector> {
        let encoded = self.encode_user(features)?;
        self.compute_embedding(&encoded)
    }
}
