//! Qdrant-backed vector store

use std::collections::HashMap;

use async_trait::async_trait;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{
    CountPointsBuilder, CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder,
    UpsertPointsBuilder, Value, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use serde_json::json;
use uuid::Uuid;

use bookbot_core::{Error, Result, ScoredEntry, VectorEntry, VectorStore};

/// Vector store backed by a Qdrant collection.
///
/// Point ids are derived from the entry id (the book title), so re-uploading
/// the same records overwrites instead of duplicating.
pub struct QdrantVectorStore {
    client: Qdrant,
    collection_name: String,
}

impl QdrantVectorStore {
    /// Connect to Qdrant and ensure the collection exists
    pub async fn connect(
        url: &str,
        collection_name: &str,
        embedding_dimension: usize,
    ) -> Result<Self> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        let exists = client
            .collection_exists(collection_name)
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        if !exists {
            client
                .create_collection(
                    CreateCollectionBuilder::new(collection_name).vectors_config(
                        VectorParamsBuilder::new(embedding_dimension as u64, Distance::Cosine),
                    ),
                )
                .await
                .map_err(|e| Error::VectorStore(e.to_string()))?;
        }

        Ok(Self {
            client,
            collection_name: collection_name.to_string(),
        })
    }

    /// Deterministic point id for an entry id: a UUID built from its md5 digest
    fn point_id_for(id: &str) -> String {
        Uuid::from_bytes(md5::compute(id.as_bytes()).0).to_string()
    }
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> String {
    payload
        .get(key)
        .and_then(|v| match &v.kind {
            Some(Kind::StringValue(s)) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn upsert(&self, entry: VectorEntry) -> Result<()> {
        let payload: Payload = json!({
            "title": entry.title,
            "document": entry.document,
        })
        .try_into()
        .map_err(|e: qdrant_client::QdrantError| Error::Serialization(e.to_string()))?;

        let point = PointStruct::new(Self::point_id_for(&entry.id), entry.embedding, payload);

        self.client
            .upsert_points(
                UpsertPointsBuilder::new(self.collection_name.as_str(), vec![point]).wait(true),
            )
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredEntry>> {
        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(
                    self.collection_name.as_str(),
                    vector.to_vec(),
                    top_k as u64,
                )
                .with_payload(true),
            )
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .map(|point| ScoredEntry {
                title: payload_str(&point.payload, "title"),
                document: payload_str(&point.payload, "document"),
                score: point.score,
            })
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        let response = self
            .client
            .count(CountPointsBuilder::new(self.collection_name.as_str()).exact(true))
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(response.result.map(|r| r.count as usize).unwrap_or(0))
    }
}
