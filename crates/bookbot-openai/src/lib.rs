//! OpenAI integration for bookbot
//!
//! This crate provides the OpenAI implementation of the ChatModel and
//! EmbeddingProvider traits.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use bookbot_core::{
    ChatMessage, ChatModel, EmbeddingProvider, Error, ModelDecision, Result, Role, ToolRequest,
    ToolSpec,
};
