//! Chat model trait and conversation types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Role of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A role-tagged conversation message in the chat-completions wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolRequest>>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
            name: None,
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// A system message carrying structured context under a well-known name
    pub fn named_system(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::system(content)
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            name: None,
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// An assistant message echoing the tool calls the model requested
    pub fn assistant_tool_calls(calls: Vec<ToolRequest>) -> Self {
        Self {
            role: Role::Assistant,
            content: None,
            name: None,
            tool_call_id: None,
            tool_calls: Some(calls),
        }
    }

    /// The locally-executed result for one tool call
    pub fn tool_result(call: &ToolRequest, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            name: Some(call.function.name.clone()),
            tool_call_id: Some(call.id.clone()),
            tool_calls: None,
        }
    }
}

/// A callable tool offered to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionSpec,
}

/// Function schema within a tool spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolSpec {
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// A tool call requested by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

/// The named function and raw JSON arguments of a tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

impl ToolRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "function".to_string(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    /// Parse the raw argument string into JSON
    pub fn parsed_arguments(&self) -> Result<serde_json::Value> {
        if self.function.arguments.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        serde_json::from_str(&self.function.arguments)
            .map_err(|e| Error::Serialization(format!("Invalid tool arguments: {}", e)))
    }
}

/// What the model decided to do with a conversation turn
#[derive(Debug, Clone)]
pub enum ModelDecision {
    /// The model answered directly with text
    FinalText(String),
    /// The model asked the caller to execute one or more tools
    ToolRequests(Vec<ToolRequest>),
}

/// Trait for chat-completion models (e.g. OpenAI)
///
/// A single entry point covers both phases of a tool-calling exchange: the
/// decision call passes the available tools, the finalization call passes an
/// empty tool slice.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a message sequence, optionally offering tools, and get a decision
    async fn chat(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<ModelDecision>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_result_carries_call_id_and_name() {
        let call = ToolRequest::new("call_1", "get_summary_by_title", r#"{"title":"Wind"}"#);
        let msg = ChatMessage::tool_result(&call, "A story about air.");

        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(msg.name.as_deref(), Some("get_summary_by_title"));
        assert_eq!(msg.content.as_deref(), Some("A story about air."));
    }

    #[test]
    fn parsed_arguments_handles_empty_and_json() {
        let empty = ToolRequest::new("call_1", "get_summary_by_title", "");
        assert_eq!(empty.parsed_arguments().unwrap(), serde_json::json!({}));

        let call = ToolRequest::new("call_2", "get_summary_by_title", r#"{"title":"Wind"}"#);
        let args = call.parsed_arguments().unwrap();
        assert_eq!(args.get("title").and_then(|t| t.as_str()), Some("Wind"));
    }

    #[test]
    fn messages_serialize_without_absent_fields() {
        let msg = ChatMessage::user("hello");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, serde_json::json!({"role": "user", "content": "hello"}));
    }
}
