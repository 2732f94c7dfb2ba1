//! Snapshot tests for the OpenAI client

#[cfg(test)]
mod snapshot_tests {
    use crate::{ChatModel, OpenAiClient, OpenAiConfig};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = OpenAiConfig {
            api_key: "test_api_key_redacted".to_string(),
            api_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        api_url: "https://api.openai.com/v1"
        chat_model: gpt-4o-mini
        embedding_model: text-embedding-3-small
        "###);
    }

    #[test]
    fn test_model_constants() {
        assert_eq!(OpenAiClient::GPT_4O_MINI, "gpt-4o-mini");
        assert_eq!(OpenAiClient::TEXT_EMBEDDING_3_SMALL, "text-embedding-3-small");
        assert_eq!(OpenAiClient::EMBEDDING_DIMENSION, 1536);
    }

    #[test]
    fn test_default_model_id() {
        let client = OpenAiClient::new(OpenAiConfig::new("test_key".to_string())).unwrap();
        assert_eq!(client.model_id(), OpenAiClient::GPT_4O_MINI);
    }
}
