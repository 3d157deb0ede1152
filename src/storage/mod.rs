//! External collaborator contracts.
//!
//! The ranking engine owns no persistence: profiles, cached recommendation
//! lists, and interaction events all live behind these async traits. The
//! `memory` submodule provides in-memory implementations used in tests and as
//! a reference backend.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use memory::{MemoryCache, MemoryInteractionSink, MemoryProfileStore};

use crate::error::Result;
use crate::features::FeatureVector;
use crate::profile::Profile;

/// Read access to profiles and their feature records.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a full profile by id.
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>>;

    /// Fetch the feature record for a user, if one exists.
    async fn get_user_features(&self, id: &str) -> Result<Option<FeatureVector>>;

    /// Fetch up to `limit` candidate feature records, excluding `excluded_id`.
    async fn get_all_candidate_features(
        &self,
        excluded_id: &str,
        limit: usize,
    ) -> Result<Vec<(String, FeatureVector)>>;
}

/// A cached recommendation list for one requester.
///
/// Lifetime and eviction are owned by the store; the engine never inspects
/// `cached_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRecommendations {
    /// Candidate ids in ranked order.
    pub candidate_ids: Vec<String>,
    /// Scores parallel to `candidate_ids`.
    pub scores: Vec<f32>,
    /// Version tag of the encoder that produced the scores.
    pub model_version: String,
    /// When the entry was written.
    pub cached_at: DateTime<Utc>,
}

/// Read/write access to cached recommendation lists.
#[async_trait]
pub trait RecommendationCache: Send + Sync {
    /// Look up the cached recommendations for a requester.
    async fn get_cached_recommendations(&self, id: &str) -> Result<Option<CachedRecommendations>>;

    /// Store recommendations for a requester, overwriting any prior entry.
    async fn cache_recommendations(
        &self,
        id: &str,
        candidate_ids: Vec<String>,
        scores: Vec<f32>,
        model_version: String,
    ) -> Result<()>;
}

/// The kind of interaction a requester took on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// The requester passed on the candidate.
    Pass,
    /// The requester liked the candidate.
    Like,
    /// Both sides liked each other.
    Match,
}

/// A write-once interaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// The user who acted.
    pub actor_id: String,
    /// The user acted upon.
    pub target_id: String,
    /// What happened.
    pub kind: InteractionKind,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
}

impl InteractionEvent {
    /// Create an event stamped with the current time.
    pub fn now<S: Into<String>>(actor_id: S, target_id: S, kind: InteractionKind) -> Self {
        Self {
            actor_id: actor_id.into(),
            target_id: target_id.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only sink for interaction events.
///
/// Delivery is at-least-once; downstream consumers must tolerate duplicates
/// or re-derive idempotency by timestamp.
#[async_trait]
pub trait InteractionSink: Send + Sync {
    /// Append one event.
    async fn record_interaction(&self, event: InteractionEvent) -> Result<()>;
}
