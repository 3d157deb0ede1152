//! In-memory store implementations for tests and demos.

use ahash::AHashMap;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use super::{
    CachedRecommendations, InteractionEvent, InteractionSink, ProfileStore, RecommendationCache,
};
use crate::error::Result;
use crate::features::{FeatureVector, extract_features};
use crate::profile::Profile;

/// In-memory profile store backed by hash maps.
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<AHashMap<String, Profile>>,
    features: RwLock<AHashMap<String, FeatureVector>>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile and derive its feature record.
    pub fn insert_profile(&self, profile: Profile) {
        let features = extract_features(&profile);
        self.features
            .write()
            .insert(profile.id.clone(), features);
        self.profiles.write().insert(profile.id.clone(), profile);
    }

    /// Remove a profile but keep its feature record.
    pub fn remove_profile(&self, id: &str) {
        self.profiles.write().remove(id);
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.read().get(id).cloned())
    }

    async fn get_user_features(&self, id: &str) -> Result<Option<FeatureVector>> {
        Ok(self.features.read().get(id).cloned())
    }

    async fn get_all_candidate_features(
        &self,
        excluded_id: &str,
        limit: usize,
    ) -> Result<Vec<(String, FeatureVector)>> {
        let features = self.features.read();
        let mut candidates: Vec<(String, FeatureVector)> = features
            .iter()
            .filter(|(id, _)| id.as_str() != excluded_id)
            .map(|(id, features)| (id.clone(), features.clone()))
            .collect();

        // Hash maps iterate in arbitrary order; keep the pool deterministic.
        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        candidates.truncate(limit);
        Ok(candidates)
    }
}

/// In-memory recommendation cache.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<AHashMap<String, CachedRecommendations>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached requesters.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl RecommendationCache for MemoryCache {
    async fn get_cached_recommendations(&self, id: &str) -> Result<Option<CachedRecommendations>> {
        Ok(self.entries.read().get(id).cloned())
    }

    async fn cache_recommendations(
        &self,
        id: &str,
        candidate_ids: Vec<String>,
        scores: Vec<f32>,
        model_version: String,
    ) -> Result<()> {
        let entry = CachedRecommendations {
            candidate_ids,
            scores,
            model_version,
            cached_at: Utc::now(),
        };
        self.entries.write().insert(id.to_string(), entry);
        Ok(())
    }
}

/// In-memory append-only interaction sink.
#[derive(Default)]
pub struct MemoryInteractionSink {
    events: RwLock<Vec<InteractionEvent>>,
}

impl MemoryInteractionSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<InteractionEvent> {
        self.events.read().clone()
    }
}

#[async_trait]
impl InteractionSink for MemoryInteractionSink {
    async fn record_interaction(&self, event: InteractionEvent) -> Result<()> {
        self.events.write().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InteractionKind;

    #[tokio::test]
    async fn test_candidate_features_exclude_requester() {
        let store = MemoryProfileStore::new();
        store.insert_profile(Profile::new("u-1", "Ada").with_industry("fintech"));
        store.insert_profile(Profile::new("u-2", "Grace").with_industry("fintech"));
        store.insert_profile(Profile::new("u-3", "Bob").with_industry("retail"));

        let candidates = store.get_all_candidate_features("u-1", 10).await.unwrap();
        let ids: Vec<&str> = candidates.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["u-2", "u-3"]);
    }

    #[tokio::test]
    async fn test_cache_overwrites() {
        let cache = MemoryCache::new();
        cache
            .cache_recommendations("u-1", vec!["a".to_string()], vec![0.9], "v1".to_string())
            .await
            .unwrap();
        cache
            .cache_recommendations("u-1", vec!["b".to_string()], vec![0.8], "v2".to_string())
            .await
            .unwrap();

        let entry = cache.get_cached_recommendations("u-1").await.unwrap().unwrap();
        assert_eq!(entry.candidate_ids, vec!["b"]);
        assert_eq!(entry.model_version, "v2");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_interaction_sink_appends() {
        let sink = MemoryInteractionSink::new();
        sink.record_interaction(InteractionEvent::now("u-1", "u-2", InteractionKind::Like))
            .await
            .unwrap();
        sink.record_interaction(InteractionEvent::now("u-1", "u-2", InteractionKind::Match))
            .await
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, InteractionKind::Like);
        assert_eq!(events[1].kind, InteractionKind::Match);
    }
}
