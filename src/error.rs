//! Error types for the Affinity library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`AffinityError`] enum. The taxonomy distinguishes errors that are
//! fatal to a ranking request (a requester with no feature record, an empty
//! candidate pool) from collaborator faults that are recovered or swallowed
//! locally (individual profile loads, interaction recording).

use std::io;

use thiserror::Error;

/// The main error type for Affinity operations.
#[derive(Error, Debug)]
pub enum AffinityError {
    /// The requester has no feature record in the profile store.
    /// Fatal to the recommendation call and surfaced to the caller.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The candidate pool is empty after excluding the requester.
    /// Fatal to the recommendation call and surfaced to the caller.
    #[error("No candidates: {0}")]
    NoCandidates(String),

    /// Embedding encoder failure for the requester or a candidate.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Profile store failure (feature load, candidate load, profile fetch).
    #[error("Store error: {0}")]
    Store(String),

    /// Recommendation cache read/write failure.
    #[error("Cache error: {0}")]
    Cache(String),

    /// The request-scoped timeout elapsed before the pipeline finished.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// I/O errors surfaced by store implementations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Opaque collaborator error.
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AffinityError.
pub type Result<T> = std::result::Result<T, AffinityError>;

impl AffinityError {
    /// Create a new user-not-found error.
    pub fn user_not_found<S: Into<String>>(msg: S) -> Self {
        AffinityError::UserNotFound(msg.into())
    }

    /// Create a new no-candidates error.
    pub fn no_candidates<S: Into<String>>(msg: S) -> Self {
        AffinityError::NoCandidates(msg.into())
    }

    /// Create a new encoding error.
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        AffinityError::Encoding(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        AffinityError::Store(msg.into())
    }

    /// Create a new cache error.
    pub fn cache<S: Into<String>>(msg: S) -> Self {
        AffinityError::Cache(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        AffinityError::Timeout(msg.into())
    }
}
