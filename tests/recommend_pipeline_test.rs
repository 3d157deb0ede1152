use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use affinity::embedding::{EmbeddingVector, EncodedUser, HashingEncoder, UserEncoder};
use affinity::error::Result;
use affinity::features::FeatureVector;
use affinity::profile::Profile;
use affinity::recommend::{RecommendConfig, RecommendEngine};
use affinity::storage::{
    MemoryCache, MemoryInteractionSink, MemoryProfileStore, RecommendationCache,
};

/// Wraps the hashing encoder and counts every encode call, so tests can
/// assert that a cache hit performs no encoding work.
struct CountingEncoder {
    inner: HashingEncoder,
    encode_calls: AtomicUsize,
}

impl CountingEncoder {
    fn new() -> Self {
        Self {
            inner: HashingEncoder::new(),
            encode_calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.encode_calls.load(Ordering::SeqCst)
    }
}

impl UserEncoder for CountingEncoder {
    fn encode_user(&self, features: &FeatureVector) -> Result<EncodedUser> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.encode_user(features)
    }

    fn compute_embedding(&self, encoded: &EncodedUser) -> Result<EmbeddingVector> {
        self.inner.compute_embedding(encoded)
    }

    fn model_version(&self) -> &str {
        "counting-v1"
    }
}

fn fintech_profile(id: &str, skills: &[&str]) -> Profile {
    let mut profile = Profile::new(id.to_string(), id.to_string())
        .with_industry("fintech")
        .with_skills(skills.iter().map(|s| s.to_string()).collect());
    profile.location = Some("Toronto".to_string());
    profile.hobbies = vec!["climbing".to_string()];
    profile
}

fn populate(store: &MemoryProfileStore) {
    store.insert_profile(fintech_profile("u-req", &["rust", "payments"]));
    store.insert_profile(fintech_profile("u-twin", &["rust", "payments"]));
    store.insert_profile(fintech_profile("u-near", &["rust", "sql"]));
    let mut far = Profile::new("u-far", "Bob").with_industry("agriculture");
    far.location = Some("Lisbon".to_string());
    far.hobbies = vec!["fishing".to_string()];
    store.insert_profile(far);
}

#[tokio::test]
async fn test_fresh_computation_ranks_by_similarity() {
    let store = Arc::new(MemoryProfileStore::new());
    populate(&store);

    let engine = RecommendEngine::new(
        store,
        Arc::new(MemoryCache::new()),
        Arc::new(MemoryInteractionSink::new()),
        Arc::new(HashingEncoder::new()),
        RecommendConfig::default(),
    );

    let results = engine.get_recommendations("u-req", 10).await.unwrap();
    assert_eq!(results.len(), 3);

    // The profile twin must outrank the unrelated profile.
    let position = |id: &str| results.iter().position(|r| r.candidate_id == id).unwrap();
    assert!(position("u-twin") < position("u-far"));

    // Scores are sorted descending and every entry carries its profile.
    for window in results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for result in &results {
        assert_eq!(result.profile.id, result.candidate_id);
    }
}

#[tokio::test]
async fn test_cache_hit_skips_encoding() {
    let store = Arc::new(MemoryProfileStore::new());
    populate(&store);

    let cache = Arc::new(MemoryCache::new());
    let encoder = Arc::new(CountingEncoder::new());
    let engine = RecommendEngine::new(
        store,
        cache.clone(),
        Arc::new(MemoryInteractionSink::new()),
        encoder.clone(),
        RecommendConfig::default(),
    );

    let first = engine.get_recommendations("u-req", 10).await.unwrap();
    let calls_after_first = encoder.calls();
    assert!(calls_after_first > 0);
    assert_eq!(cache.len(), 1);

    // Second call is served from the cache: same order, no encoder calls.
    let second = engine.get_recommendations("u-req", 10).await.unwrap();
    assert_eq!(encoder.calls(), calls_after_first);

    let first_ids: Vec<&str> = first.iter().map(|r| r.candidate_id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|r| r.candidate_id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.score, b.score);
    }
}

#[tokio::test]
async fn test_cache_write_carries_model_version() {
    let store = Arc::new(MemoryProfileStore::new());
    populate(&store);

    let cache = Arc::new(MemoryCache::new());
    let engine = RecommendEngine::new(
        store,
        cache.clone(),
        Arc::new(MemoryInteractionSink::new()),
        Arc::new(CountingEncoder::new()),
        RecommendConfig::default(),
    );

    engine.get_recommendations("u-req", 10).await.unwrap();

    let entry = cache
        .get_cached_recommendations("u-req")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.model_version, "counting-v1");
    assert_eq!(entry.candidate_ids.len(), entry.scores.len());
}

#[tokio::test]
async fn test_interactions_recorded_after_ranking() {
    let store = Arc::new(MemoryProfileStore::new());
    populate(&store);

    let sink = Arc::new(MemoryInteractionSink::new());
    let engine = RecommendEngine::new(
        store,
        Arc::new(MemoryCache::new()),
        sink.clone(),
        Arc::new(HashingEncoder::new()),
        RecommendConfig::default(),
    );

    let results = engine.get_recommendations("u-req", 2).await.unwrap();
    engine
        .record_like("u-req", &results[0].candidate_id)
        .await;
    engine
        .record_pass("u-req", &results[1].candidate_id)
        .await;

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].actor_id, "u-req");
    assert_eq!(events[0].target_id, results[0].candidate_id);
}
