//! Retrieval policy: query embedding and candidate title selection

use std::collections::HashSet;
use std::sync::Arc;

use bookbot_core::{EmbeddingProvider, Result, VectorStore};

/// Default number of nearest neighbours fetched per query
pub const DEFAULT_TOP_K: usize = 5;

/// Turns a user query into a deduplicated ranked list of candidate titles.
///
/// Guarantees: no two output titles compare equal case-insensitively, empty
/// titles are dropped, and order reflects the store's similarity rank with
/// first-seen tie-break.
pub struct TitleRetriever<E: EmbeddingProvider, V: VectorStore> {
    embedder: Arc<E>,
    store: Arc<V>,
    top_k: usize,
}

impl<E: EmbeddingProvider, V: VectorStore> TitleRetriever<E, V> {
    pub fn new(embedder: Arc<E>, store: Arc<V>) -> Self {
        Self {
            embedder,
            store,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Embed the query and return candidate titles in rank order
    pub async fn retrieve(&self, query: &str) -> Result<Vec<String>> {
        let vector = self.embedder.embed(query).await?;
        let results = self.store.query(&vector, self.top_k).await?;

        let mut titles = Vec::new();
        let mut seen = HashSet::new();
        for entry in results {
            if entry.title.is_empty() {
                continue;
            }
            let key = entry.title.trim().to_lowercase();
            if seen.insert(key) {
                titles.push(entry.title);
            }
        }
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalVectorStore;
    use async_trait::async_trait;
    use bookbot_core::VectorEntry;

    struct FixedEmbedder(Vec<f32>);

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    async fn seeded_store() -> Arc<LocalVectorStore> {
        let store = Arc::new(LocalVectorStore::new());
        let entries = vec![
            ("Wind", vec![1.0, 0.0, 0.0]),
            ("WIND", vec![0.8, 0.2, 0.0]),
            ("Sea", vec![0.5, 0.5, 0.0]),
            ("", vec![0.4, 0.6, 0.0]),
            ("Dust", vec![0.0, 1.0, 0.0]),
        ];
        for (title, embedding) in entries {
            store
                .upsert(VectorEntry {
                    id: title.to_string(),
                    document: format!("About {}.", title),
                    title: title.to_string(),
                    embedding,
                })
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn dedupes_case_insensitively_preserving_rank_order() {
        let store = seeded_store().await;
        let retriever = TitleRetriever::new(Arc::new(FixedEmbedder(vec![1.0, 0.0, 0.0])), store);

        let titles = retriever.retrieve("airy books").await.unwrap();
        // "WIND" collapses into "Wind"; the empty title is dropped
        assert_eq!(titles, vec!["Wind", "Sea", "Dust"]);
    }

    #[tokio::test]
    async fn respects_top_k() {
        let store = seeded_store().await;
        let retriever = TitleRetriever::new(Arc::new(FixedEmbedder(vec![1.0, 0.0, 0.0])), store)
            .with_top_k(2);

        let titles = retriever.retrieve("airy books").await.unwrap();
        assert_eq!(titles, vec!["Wind"]);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_candidates() {
        let store = Arc::new(LocalVectorStore::new());
        let retriever = TitleRetriever::new(Arc::new(FixedEmbedder(vec![1.0, 0.0])), store);

        let titles = retriever.retrieve("anything").await.unwrap();
        assert!(titles.is_empty());
    }
}
