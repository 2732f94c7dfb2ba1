//! Dialogue orchestrator: constrained prompt, tool-call handling, fallbacks

use std::sync::Arc;

use serde_json::json;

use bookbot_core::{
    BookRecord, ChatMessage, ChatModel, Error, ModelDecision, Result, ToolSpec,
};

/// Guidance returned when retrieval produces no candidates
pub const NO_MATCH_MESSAGE: &str =
    "I couldn't find a matching book. Try a different query or a more specific title.";

const GET_SUMMARY_TOOL: &str = "get_summary_by_title";

const SYSTEM_PROMPT: &str = "You are a helpful book assistant.\n\
- You MUST pick at most ONE title from the provided candidate list.\n\
- If the user clearly asked for an exact title in the list, call the tool `get_summary_by_title` with that title.\n\
- If the query is thematic/vague, choose the BEST MATCH from candidates and call the tool for that title.\n\
- NEVER invent titles; only use those in candidates.\n\
- If none of the candidates seem relevant, say so and ask the user for a clearer title.";

/// Outcome of validating a tool-requested title against the candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleCheck {
    /// The requested title is a member of the candidate list
    Allowed(String),
    /// The requested title was outside the list and was forced to the top candidate
    ClampedTo(String),
}

impl TitleCheck {
    pub fn title(&self) -> &str {
        match self {
            TitleCheck::Allowed(t) | TitleCheck::ClampedTo(t) => t,
        }
    }
}

/// Return the full summary for an exact book title.
///
/// A title absent from the records despite being a valid candidate means
/// the vector store and the record list are out of sync; the mismatch is
/// reported in the returned string rather than hidden.
pub fn get_summary_by_title(title: &str, books: &[BookRecord]) -> String {
    books
        .iter()
        .find(|b| b.title == title)
        .map(|b| b.summary.clone())
        .unwrap_or_else(|| format!("Summary for '{}' not found.", title))
}

// `candidates` is non-empty here: `answer` returns early otherwise.
fn check_candidate_title(requested: &str, candidates: &[String]) -> TitleCheck {
    if candidates.iter().any(|c| c == requested) {
        TitleCheck::Allowed(requested.to_string())
    } else {
        TitleCheck::ClampedTo(candidates[0].clone())
    }
}

/// Orchestrates one conversation turn against the chat model.
///
/// Holds the parsed record list for local tool execution; candidates come
/// from the retrieval policy per query. No cross-query memory.
pub struct BookAssistant<C: ChatModel> {
    model: Arc<C>,
    books: Vec<BookRecord>,
}

impl<C: ChatModel> BookAssistant<C> {
    pub fn new(model: Arc<C>, books: Vec<BookRecord>) -> Self {
        Self { model, books }
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    fn summary_tool() -> ToolSpec {
        ToolSpec::function(
            GET_SUMMARY_TOOL,
            "Return the full summary for a book by its exact title.",
            json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The exact title of the book.",
                    }
                },
                "required": ["title"],
            }),
        )
    }

    /// Produce an answer for one user query given ranked candidate titles.
    ///
    /// Empty candidates short-circuit to the guidance message without any
    /// model call. Otherwise the model gets one decision call with the
    /// summary tool; a tool request leads to local execution and a
    /// finalization call, no tool request leads to the fixed best-match
    /// template.
    pub async fn answer(&self, user_text: &str, candidates: &[String]) -> Result<String> {
        if candidates.is_empty() {
            return Ok(NO_MATCH_MESSAGE.to_string());
        }

        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_text),
            ChatMessage::named_system(
                "retrieval_context",
                json!({ "candidates": candidates }).to_string(),
            ),
        ];

        let decision = self.model.chat(&messages, &[Self::summary_tool()]).await?;

        match decision {
            ModelDecision::ToolRequests(calls) => {
                for call in calls {
                    if call.function.name != GET_SUMMARY_TOOL {
                        continue;
                    }
                    let args = call.parsed_arguments()?;
                    let requested = args.get("title").and_then(|t| t.as_str()).unwrap_or_default();
                    let checked = check_candidate_title(requested, candidates);
                    let result = get_summary_by_title(checked.title(), &self.books);

                    messages.push(ChatMessage::assistant_tool_calls(vec![call.clone()]));
                    messages.push(ChatMessage::tool_result(&call, result));
                }

                match self.model.chat(&messages, &[]).await? {
                    ModelDecision::FinalText(text) => Ok(text),
                    ModelDecision::ToolRequests(_) => Err(Error::ChatModel(
                        "Model requested a tool on the finalization call".to_string(),
                    )),
                }
            }
            // Pragmatic fallback: present the top candidate directly
            ModelDecision::FinalText(_) => {
                let top_title = &candidates[0];
                let result = get_summary_by_title(top_title, &self.books);
                Ok(format!("Best match: **{}**\n\n{}", top_title, result))
            }
        }
    }
}
