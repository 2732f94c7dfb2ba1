//! RAG pipeline for bookbot
//!
//! This crate provides document parsing, vector store implementations,
//! the upload step, and the retrieval policy.

mod books;
mod indexer;
mod retriever;
mod store;

pub use books::{load_books, split_records};
pub use indexer::BookIndexer;
pub use retriever::{DEFAULT_TOP_K, TitleRetriever};
pub use store::{LocalVectorStore, QdrantVectorStore};

// Re-export core types for convenience
pub use bookbot_core::{
    BookRecord, EmbeddingProvider, Error, Result, ScoredEntry, VectorEntry, VectorStore,
};
