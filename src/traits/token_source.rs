use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    /// A bearer token valid for the cloud-platform scope.
    async fn access_token(&self) -> Result<String, AiProviderError>;

    /// Project the credential belongs to, if it names one.
    async fn project_id(&self) -> Result<Option<String>, AiProviderError>;
}
