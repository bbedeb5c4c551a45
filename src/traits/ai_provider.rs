use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;

/// The one call the runner makes against a generative model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate_content(&self, prompts: Vec<String>, config: GeminiGenerationConfig)
        -> Result<GeminiResponse, AiProviderError>;
}
