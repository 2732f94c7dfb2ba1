//! CLI layer for bookbot
//!
//! This crate provides the dialogue orchestrator and the terminal UI.

mod assistant;
mod ui;

pub use assistant::{BookAssistant, NO_MATCH_MESSAGE, TitleCheck, get_summary_by_title};
pub use ui::{display_banner, display_book_count, handle_input_with_history, print_help};

// Re-export core types for convenience
pub use bookbot_core::{BookRecord, ChatModel, Error, ModelDecision, Result};
