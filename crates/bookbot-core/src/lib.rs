//! Core traits and types for bookbot
//!
//! This crate defines the fundamental traits and types used across the bookbot system.
//! It provides capability-facing interfaces for chat models, embedding providers, and
//! vector stores, making the pipeline test-friendly and extensible.

pub mod chat;
pub mod embedding;
pub mod error;
pub mod record;
pub mod vector_store;

pub use chat::{ChatMessage, ChatModel, FunctionCall, FunctionSpec, ModelDecision, Role, ToolRequest, ToolSpec};
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use record::BookRecord;
pub use vector_store::{ScoredEntry, VectorEntry, VectorStore};
