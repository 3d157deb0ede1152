//! Embedding vectors and the pluggable user encoder.
//!
//! The encoder is a black box to the ranking pipeline: it turns a
//! [`FeatureVector`](crate::features::FeatureVector) into an opaque
//! intermediate representation and then into a fixed-dimension
//! [`EmbeddingVector`]. The only operation the pipeline performs on
//! embeddings is cosine similarity.

pub mod encoder;
pub mod hashing;

pub use encoder::{EncodedUser, UserEncoder};
pub use hashing::HashingEncoder;

use serde::{Deserialize, Serialize};

use crate::error::{AffinityError, Result};

/// Fixed dimension of all embedding vectors.
pub const EMBEDDING_DIM: usize = 64;

/// A fixed-dimension embedding produced by a [`UserEncoder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    /// Wrap raw values, validating the dimension.
    pub fn new(values: Vec<f32>) -> Result<Self> {
        if values.len() != EMBEDDING_DIM {
            return Err(AffinityError::encoding(format!(
                "expected dimension {}, got {}",
                EMBEDDING_DIM,
                values.len()
            )));
        }
        Ok(Self(values))
    }

    /// The all-zero vector.
    pub fn zeros() -> Self {
        Self(vec![0.0; EMBEDDING_DIM])
    }

    /// Raw component access.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Cosine similarity with another embedding, in `[-1, 1]`.
    ///
    /// Returns `0.0` when either vector has zero norm.
    pub fn cosine_similarity(&self, other: &EmbeddingVector) -> f32 {
        let mut dot = 0.0f32;
        let mut norm_a = 0.0f32;
        let mut norm_b = 0.0f32;

        for (a, b) in self.0.iter().zip(other.0.iter()) {
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }

        let denominator = norm_a.sqrt() * norm_b.sqrt();
        if denominator == 0.0 {
            0.0
        } else {
            (dot / denominator).clamp(-1.0, 1.0)
        }
    }
}
