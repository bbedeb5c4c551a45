use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::MODEL;
use crate::config::environment::Environment;
use crate::config::vertex_config::VertexConfig;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::gcp_token_source::GcpTokenSource;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::traits::ai_provider::AiProvider;
use crate::traits::token_source::AccessTokenSource;

#[derive(Clone)]
pub struct VertexProvider {
    client: Client,
    config: VertexConfig,
    token_source: Arc<dyn AccessTokenSource>,
}

impl VertexProvider {
    pub fn new(config: VertexConfig, token_source: Arc<dyn AccessTokenSource>) -> Self {
        Self {
            client: Client::new(),
            config,
            token_source,
        }
    }

    /// Resolves credentials and project settings from `env`.
    pub async fn from_environment(env: &Environment) -> Result<Self, AiProviderError> {
        let token_source = GcpTokenSource::from_environment(env).await?;
        Ok(Self::new(VertexConfig::from_environment(env), Arc::new(token_source)))
    }

    async fn resolve_project_id(&self) -> Result<String, AiProviderError> {
        if let Some(project_id) = &self.config.project_id {
            return Ok(project_id.clone());
        }

        self.token_source
            .project_id()
            .await?
            .ok_or(AiProviderError::MissingProject)
    }

    async fn make_request(&self, url: &str, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::info!("📦 Request model: {}", MODEL);

        let token = self.token_source.access_token().await?;

        let response = self.client
            .post(url)
            .bearer_auth(token)
            .json(request_body)
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl AiProvider for VertexProvider {
    async fn generate_content(&self, prompts: Vec<String>, config: GeminiGenerationConfig)
        -> Result<GeminiResponse, AiProviderError> {
        let project_id = self.resolve_project_id().await?;
        let url = self.config.generate_content_url(&project_id, MODEL);
        let request_body = GeminiRequest::new(prompts, config);

        log::debug!("POST {}", url);
        let response = self.make_request(&url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Vertex AI API Error Response: {}", error_text);

            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(usage) = &parsed.usage_metadata {
            log::info!("🧮 Tokens: {} in, {} out", usage.prompt_token_count, usage.candidates_token_count);
        }

        Ok(parsed)
    }
}
