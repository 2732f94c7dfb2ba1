//! OpenAI configuration

use serde::{Deserialize, Serialize};
use std::env;

use bookbot_core::{Error, Result};

use crate::client::OpenAiClient;

/// Configuration for the OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_url: String,
    pub chat_model: String,
    pub embedding_model: String,
}

impl OpenAiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Configuration("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let api_url =
            env::var("OPENAI_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Ok(Self {
            api_key,
            api_url,
            chat_model: OpenAiClient::GPT_4O_MINI.to_string(),
            embedding_model: OpenAiClient::TEXT_EMBEDDING_3_SMALL.to_string(),
        })
    }

    /// Create configuration with an explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: "https://api.openai.com/v1".to_string(),
            chat_model: OpenAiClient::GPT_4O_MINI.to_string(),
            embedding_model: OpenAiClient::TEXT_EMBEDDING_3_SMALL.to_string(),
        }
    }
}
