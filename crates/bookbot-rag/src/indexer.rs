//! Upload step: embed summaries and populate the vector store

use std::sync::Arc;

use bookbot_core::{BookRecord, EmbeddingProvider, Result, VectorEntry, VectorStore};

/// Populates a vector store from parsed book records.
///
/// One entry per record, keyed by title, embedding computed from the
/// summary. Embedding failures propagate and abort the upload.
pub struct BookIndexer<E: EmbeddingProvider, V: VectorStore> {
    embedder: Arc<E>,
    store: Arc<V>,
}

impl<E: EmbeddingProvider, V: VectorStore> BookIndexer<E, V> {
    pub fn new(embedder: Arc<E>, store: Arc<V>) -> Self {
        Self { embedder, store }
    }

    /// Embed each record's summary and upsert it, returning the count
    pub async fn index_books(&self, books: &[BookRecord]) -> Result<usize> {
        for book in books {
            let embedding = self.embedder.embed(&book.summary).await?;
            self.store
                .upsert(VectorEntry {
                    id: book.title.clone(),
                    document: book.summary.clone(),
                    title: book.title.clone(),
                    embedding,
                })
                .await?;
        }
        Ok(books.len())
    }
}
