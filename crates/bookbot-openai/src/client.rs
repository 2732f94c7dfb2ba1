//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use bookbot_core::{
    ChatMessage, ChatModel, EmbeddingProvider, Error, ModelDecision, Result, ToolRequest, ToolSpec,
};

use crate::config::OpenAiConfig;

/// OpenAI chat and embedding client
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [ToolSpec]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'a str>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolRequest>>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl OpenAiClient {
    /// Model constants
    pub const GPT_4O_MINI: &'static str = "gpt-4o-mini";
    pub const TEXT_EMBEDDING_3_SMALL: &'static str = "text-embedding-3-small";

    /// Vector length produced by `TEXT_EMBEDDING_3_SMALL`
    pub const EMBEDDING_DIMENSION: usize = 1536;

    /// Create a new OpenAI client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new OpenAI client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// Set the chat model to use
    pub fn with_chat_model(mut self, model_id: impl Into<String>) -> Self {
        self.config.chat_model = model_id.into();
        self
    }

    async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(Error::ChatModel(format!(
            "OpenAI {} request failed with status {}: {}",
            what, status, error_text
        )))
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request_body = EmbeddingRequest {
            model: &self.config.embedding_model,
            input: text,
        };

        let url = format!("{}/embeddings", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Embedding(format!(
                "OpenAI embeddings request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| Error::Embedding("Empty embeddings response".to_string()))
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn chat(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<ModelDecision> {
        let request_body = ChatRequest {
            model: &self.config.chat_model,
            messages,
            tools: (!tools.is_empty()).then_some(tools),
            tool_choice: (!tools.is_empty()).then_some("auto"),
        };

        let url = format!("{}/chat/completions", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "chat completions").await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::ChatModel("No choices in completion response".to_string()))?;

        match choice.message.tool_calls {
            Some(calls) if !calls.is_empty() => Ok(ModelDecision::ToolRequests(calls)),
            _ => Ok(ModelDecision::FinalText(
                choice.message.content.unwrap_or_default(),
            )),
        }
    }

    fn model_id(&self) -> &str {
        &self.config.chat_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_includes_tools_and_auto_choice() {
        let messages = vec![ChatMessage::user("find me a book")];
        let tools = vec![ToolSpec::function(
            "get_summary_by_title",
            "Return the full summary for a book by its exact title.",
            json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "The exact title of the book."}
                },
                "required": ["title"],
            }),
        )];

        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            tools: Some(&tools),
            tool_choice: Some("auto"),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["tool_choice"], "auto");
        assert_eq!(value["tools"][0]["type"], "function");
        assert_eq!(value["tools"][0]["function"]["name"], "get_summary_by_title");
        assert_eq!(
            value["tools"][0]["function"]["parameters"]["required"],
            json!(["title"])
        );
    }

    #[test]
    fn chat_request_omits_tools_on_finalization_call() {
        let messages = vec![ChatMessage::user("find me a book")];
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            tools: None,
            tool_choice: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
        assert!(value.get("tool_choice").is_none());
    }

    #[test]
    fn completion_response_parses_tool_calls() {
        let raw = json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "get_summary_by_title",
                            "arguments": "{\"title\":\"Wind\"}"
                        }
                    }]
                }
            }]
        });

        let parsed: ChatResponse = serde_json::from_value(raw).unwrap();
        let calls = parsed.choices[0].message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "get_summary_by_title");
        assert_eq!(
            calls[0].parsed_arguments().unwrap()["title"],
            json!("Wind")
        );
    }
}
