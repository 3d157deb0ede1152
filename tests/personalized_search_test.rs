use std::sync::Arc;

use affinity::embedding::HashingEncoder;
use affinity::fusion::QueryDifficulty;
use affinity::profile::{Profile, WorkExperience};
use affinity::query::{ParsedQuery, QueryEntities};
use affinity::recommend::{RecommendConfig, RecommendEngine};
use affinity::search::{SearchConfig, SearchEngine};
use affinity::storage::{MemoryCache, MemoryInteractionSink, MemoryProfileStore};

fn engine_over(store: Arc<MemoryProfileStore>) -> SearchEngine {
    let recommend = RecommendEngine::new(
        store,
        Arc::new(MemoryCache::new()),
        Arc::new(MemoryInteractionSink::new()),
        Arc::new(HashingEncoder::new()),
        RecommendConfig::default(),
    );
    SearchEngine::new(Arc::new(recommend), SearchConfig::default())
}

fn base_profile(id: &str) -> Profile {
    let mut profile = Profile::new(id.to_string(), id.to_string())
        .with_industry("software")
        .with_skills(vec!["python".to_string()]);
    profile.location = Some("Berlin".to_string());
    profile.hobbies = vec!["chess".to_string()];
    profile
}

#[tokio::test]
async fn test_text_signal_reranks_entity_match_upward() {
    let store = Arc::new(MemoryProfileStore::new());
    store.insert_profile(base_profile("u-req"));

    // Lexically strong candidate: current company and title match the query.
    let strong = base_profile("u-strong")
        .with_company("Stripe")
        .with_job_title("Infrastructure Lead")
        .with_work_experience(
            WorkExperience::new("Stripe", "Infrastructure Lead").with_years(Some(2021), None),
        );
    store.insert_profile(strong);

    // Embedding-identical candidates with no lexical relevance.
    store.insert_profile(base_profile("u-plain-a"));
    store.insert_profile(base_profile("u-plain-b"));

    let engine = engine_over(store);

    let query = ParsedQuery::new(
        "ai infra lead at stripe ny",
        ["ai", "infra", "lead", "at", "stripe", "ny"]
            .iter()
            .map(|t| t.to_string())
            .collect(),
    )
    .with_entities(QueryEntities {
        companies: vec!["stripe".to_string()],
        ..QueryEntities::default()
    });

    let outcome = engine.search("u-req", &query, 10).await.unwrap();

    // 6 tokens resets the weights to (0.2, 0.8); the single entity is below
    // the richness threshold so no further shift applies.
    assert!((outcome.weights.recommendation - 0.2).abs() < 1e-9);
    assert!((outcome.weights.text - 0.8).abs() < 1e-9);

    // All candidates tie on the embedding signal (company and title are not
    // features), so the text signal decides the order.
    assert_eq!(outcome.results[0].candidate_id, "u-strong");
    assert!(outcome.results[0].text_score > 0.0);
}

#[tokio::test]
async fn test_simple_query_weights_and_difficulty() {
    let store = Arc::new(MemoryProfileStore::new());
    store.insert_profile(base_profile("u-req"));
    store.insert_profile(base_profile("u-a"));
    store.insert_profile(base_profile("u-b"));

    let engine = engine_over(store);

    // One token, no entities: the balanced path, then the domain-vocabulary
    // shift for "founder".
    let query = ParsedQuery::new("founder", vec!["founder".to_string()]);
    let outcome = engine.search("u-req", &query, 10).await.unwrap();

    assert_eq!(outcome.difficulty, QueryDifficulty::Simple);
    assert!((outcome.weights.recommendation - 0.45).abs() < 1e-9);
    assert!((outcome.weights.text - 0.55).abs() < 1e-9);
}

#[tokio::test]
async fn test_results_sorted_and_truncated() {
    let store = Arc::new(MemoryProfileStore::new());
    store.insert_profile(base_profile("u-req"));
    for i in 0..8 {
        store.insert_profile(base_profile(&format!("u-c{i}")));
    }

    let engine = engine_over(store);
    let query = ParsedQuery::new("chess", vec!["chess".to_string()]);
    let outcome = engine.search("u-req", &query, 3).await.unwrap();

    assert_eq!(outcome.results.len(), 3);
    for window in outcome.results.windows(2) {
        assert!(window[0].fused_score >= window[1].fused_score);
    }
}

#[tokio::test]
async fn test_search_surfaces_pipeline_errors() {
    let store = Arc::new(MemoryProfileStore::new());
    // Requester exists but the pool is empty after exclusion.
    store.insert_profile(base_profile("u-req"));

    let engine = engine_over(store);
    let query = ParsedQuery::new("founder", vec!["founder".to_string()]);

    let error = engine.search("u-req", &query, 10).await.unwrap_err();
    assert!(matches!(
        error,
        affinity::AffinityError::NoCandidates(_)
    ));
}
