//! File-backed local vector store

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bookbot_core::{Error, Result, ScoredEntry, VectorEntry, VectorStore};

#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    entries: Vec<VectorEntry>,
}

/// In-memory vector store with cosine similarity and optional JSON
/// persistence.
///
/// Upserting an existing id replaces the previous entry, so re-running the
/// upload step is idempotent.
pub struct LocalVectorStore {
    data_file: Option<PathBuf>,
    entries: RwLock<Vec<VectorEntry>>,
}

impl LocalVectorStore {
    /// Create a purely in-memory store
    pub fn new() -> Self {
        Self {
            data_file: None,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a store persisted to a JSON file, loading existing entries
    pub fn with_persistence(data_file: impl Into<PathBuf>) -> Result<Self> {
        let data_file = data_file.into();
        let entries = if data_file.exists() {
            Self::load_from_file(&data_file)?
        } else {
            Vec::new()
        };

        Ok(Self {
            data_file: Some(data_file),
            entries: RwLock::new(entries),
        })
    }

    fn load_from_file(path: &Path) -> Result<Vec<VectorEntry>> {
        let content = std::fs::read_to_string(path)?;
        let data: StoreData =
            serde_json::from_str(&content).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(data.entries)
    }

    fn save_to_file(&self, entries: &[VectorEntry]) -> Result<()> {
        if let Some(path) = &self.data_file {
            let data = StoreData {
                entries: entries.to_vec(),
            };
            let content = serde_json::to_string_pretty(&data)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }
}

impl Default for LocalVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        dot / (mag_a * mag_b)
    }
}

#[async_trait]
impl VectorStore for LocalVectorStore {
    async fn upsert(&self, entry: VectorEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::VectorStore("Store lock poisoned".to_string()))?;

        entries.retain(|e| e.id != entry.id);
        entries.push(entry);
        self.save_to_file(&entries)
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::VectorStore("Store lock poisoned".to_string()))?;

        let mut scored: Vec<ScoredEntry> = entries
            .iter()
            .map(|e| ScoredEntry {
                title: e.title.clone(),
                document: e.document.clone(),
                score: cosine_similarity(vector, &e.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn count(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::VectorStore("Store lock poisoned".to_string()))?;
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, document: &str, embedding: Vec<f32>) -> VectorEntry {
        VectorEntry {
            id: title.to_string(),
            document: document.to_string(),
            title: title.to_string(),
            embedding,
        }
    }

    #[tokio::test]
    async fn query_ranks_by_cosine_similarity() {
        let store = LocalVectorStore::new();
        store.upsert(entry("Sea", "Waves.", vec![0.0, 1.0, 0.0])).await.unwrap();
        store.upsert(entry("Wind", "Air.", vec![1.0, 0.0, 0.0])).await.unwrap();
        store.upsert(entry("Dust", "Sand.", vec![0.5, 0.5, 0.0])).await.unwrap();

        let results = store.query(&[1.0, 0.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Wind");
        assert_eq!(results[1].title, "Dust");
        assert!(results[0].score > results[1].score);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_id() {
        let store = LocalVectorStore::new();
        store.upsert(entry("Wind", "Old.", vec![1.0, 0.0])).await.unwrap();
        store.upsert(entry("Wind", "New.", vec![1.0, 0.0])).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let results = store.query(&[1.0, 0.0], 1).await.unwrap();
        assert_eq!(results[0].document, "New.");
    }

    #[tokio::test]
    async fn persists_entries_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("vectors.json");

        let store = LocalVectorStore::with_persistence(&data_file).unwrap();
        store.upsert(entry("Wind", "Air.", vec![1.0, 0.0])).await.unwrap();
        drop(store);

        let reopened = LocalVectorStore::with_persistence(&data_file).unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
        let results = reopened.query(&[1.0, 0.0], 5).await.unwrap();
        assert_eq!(results[0].title, "Wind");
    }

    #[tokio::test]
    async fn mismatched_dimensions_score_zero() {
        let store = LocalVectorStore::new();
        store.upsert(entry("Wind", "Air.", vec![1.0, 0.0, 0.0])).await.unwrap();

        let results = store.query(&[1.0, 0.0], 1).await.unwrap();
        assert_eq!(results[0].score, 0.0);
    }
}
