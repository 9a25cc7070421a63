use aws_config::BehaviorVersion;
use serde::{Deserialize, Serialize};

/// Cross-region inference profile used when the caller does not pick a
/// model. The Converse API requires a profile ID, not a bare model ID.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    pub model_id: String,
    pub max_tokens: i32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: 2000,
        }
    }
}

/// Build a Bedrock runtime client from the ambient AWS environment
/// (environment variables, shared config, instance metadata).
pub async fn bedrock_client() -> aws_sdk_bedrockruntime::Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    aws_sdk_bedrockruntime::Client::new(&config)
}
