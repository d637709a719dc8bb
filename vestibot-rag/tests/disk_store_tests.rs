//! Integration tests for the disk-backed vector store.

use std::collections::HashMap;
use std::sync::Arc;

use vestibot_rag::disk::DiskVectorStore;
use vestibot_rag::document::Chunk;
use vestibot_rag::error::RagError;
use vestibot_rag::mock::MockEmbedder;
use vestibot_rag::vectorstore::VectorStore;

fn chunk(content: &str) -> Chunk {
    Chunk {
        content: content.to_string(),
        start_offset: 0,
        metadata: HashMap::new(),
        document_id: "doc_1".to_string(),
    }
}

/// Maps a few known words to fixed, distinguishable vectors.
fn keyword_embedder() -> MockEmbedder {
    MockEmbedder::new(3, |text| {
        if text.contains("alpha") {
            vec![1.0, 0.0, 0.0]
        } else if text.contains("beta") {
            vec![0.8, 0.6, 0.0]
        } else if text.contains("gamma") {
            vec![0.0, 1.0, 0.0]
        } else {
            vec![0.0, 0.0, 1.0]
        }
    })
}

#[tokio::test]
async fn query_ranks_by_descending_similarity() {
    let store = DiskVectorStore::open("./unused", Arc::new(keyword_embedder()));
    store
        .add(&[chunk("gamma text"), chunk("alpha text"), chunk("beta text")])
        .await
        .unwrap();

    let results = store.query("alpha", 2).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].chunk.content, "alpha text");
    assert_eq!(results[1].chunk.content, "beta text");
    assert!(results[0].score > results[1].score);
}

#[tokio::test]
async fn query_returns_fewer_results_than_top_k_when_store_is_small() {
    let store = DiskVectorStore::open("./unused", Arc::new(keyword_embedder()));
    store.add(&[chunk("alpha text")]).await.unwrap();

    let results = store.query("alpha", 10).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn ties_are_broken_by_insertion_order() {
    let store = DiskVectorStore::open("./unused", Arc::new(keyword_embedder()));
    store.add(&[chunk("alpha first"), chunk("alpha second")]).await.unwrap();

    let results = store.query("alpha", 2).await.unwrap();

    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].chunk.content, "alpha first");
    assert_eq!(results[1].chunk.content, "alpha second");
}

#[tokio::test]
async fn empty_store_query_returns_empty_not_error() {
    let store = DiskVectorStore::open("./unused", Arc::new(keyword_embedder()));
    let results = store.query("anything", 4).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn persist_and_load_round_trip_preserves_queries() {
    let dir = tempfile::tempdir().unwrap();

    let store = DiskVectorStore::open(dir.path(), Arc::new(keyword_embedder()));
    store.add(&[chunk("alpha text"), chunk("gamma text")]).await.unwrap();
    store.persist().await.unwrap();
    // Idempotent: a second flush is harmless.
    store.persist().await.unwrap();

    let reloaded = DiskVectorStore::load(dir.path(), Arc::new(keyword_embedder())).await.unwrap();
    assert_eq!(reloaded.len().await, 2);

    let before = store.query("alpha", 2).await.unwrap();
    let after = reloaded.query("alpha", 2).await.unwrap();

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.chunk, a.chunk);
        assert_eq!(b.score, a.score);
    }
}

#[tokio::test]
async fn load_from_missing_location_is_store_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = DiskVectorStore::load(dir.path(), Arc::new(keyword_embedder())).await.unwrap_err();
    assert!(matches!(err, RagError::StoreNotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn failing_embedder_aborts_the_batch_without_mutation() {
    let dir = tempfile::tempdir().unwrap();

    // Seed the index with one persisted entry.
    let store = DiskVectorStore::open(dir.path(), Arc::new(keyword_embedder()));
    store.add(&[chunk("alpha text")]).await.unwrap();
    store.persist().await.unwrap();

    // Second batch fails partway through embedding.
    let flaky = Arc::new(MockEmbedder::new(3, |_| vec![1.0, 0.0, 0.0]).failing_after(1));
    let store = DiskVectorStore::load(dir.path(), flaky).await.unwrap();
    let err = store
        .add(&[chunk("beta text"), chunk("gamma text"), chunk("delta text")])
        .await
        .unwrap_err();

    assert!(matches!(err, RagError::Provider { .. }), "got {err:?}");
    assert_eq!(store.len().await, 1, "failed batch must not grow the index");

    // The durable copy is untouched too.
    let reloaded = DiskVectorStore::load(dir.path(), Arc::new(keyword_embedder())).await.unwrap();
    assert_eq!(reloaded.len().await, 1);
}

#[tokio::test]
async fn wrong_sized_embedding_is_a_config_error() {
    let lying = Arc::new(MockEmbedder::new(3, |_| vec![1.0, 0.0]));
    let store = DiskVectorStore::open("./unused", lying);

    let err = store.add(&[chunk("alpha text")]).await.unwrap_err();
    assert!(matches!(err, RagError::Config(_)), "got {err:?}");
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn dimension_mismatch_on_load_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();

    let store = DiskVectorStore::open(dir.path(), Arc::new(keyword_embedder()));
    store.add(&[chunk("alpha text")]).await.unwrap();
    store.persist().await.unwrap();

    let wider = Arc::new(MockEmbedder::new(4, |_| vec![0.0; 4]));
    let err = DiskVectorStore::load(dir.path(), wider).await.unwrap_err();
    assert!(matches!(err, RagError::Config(_)), "got {err:?}");
}
