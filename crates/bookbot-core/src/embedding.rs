//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Trait for text embedding providers
///
/// A direct passthrough to an embedding model: given text, return a
/// fixed-length numeric vector. Remote failures propagate to the caller.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
