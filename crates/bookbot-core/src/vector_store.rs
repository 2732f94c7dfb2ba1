//! Vector store trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// An entry stored in the vector store
///
/// Invariant: `id` and `title` both equal the originating book record's
/// title exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorEntry {
    pub id: String,
    pub document: String,
    pub title: String,
    pub embedding: Vec<f32>,
}

/// A ranked nearest-neighbour result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub title: String,
    pub document: String,
    pub score: f32,
}

/// Trait for vector stores (e.g. Qdrant, local file-backed store)
///
/// Upserting an existing id overwrites the previous entry. Query results
/// come back in the store's own similarity rank order.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or replace one entry
    async fn upsert(&self, entry: VectorEntry) -> Result<()>;

    /// Return up to `top_k` nearest entries for a query vector
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredEntry>>;

    /// Get the total number of stored entries
    async fn count(&self) -> Result<usize>;
}
