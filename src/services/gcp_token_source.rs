use std::sync::Arc;
use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use crate::config::constants::{CLOUD_PLATFORM_SCOPE, GOOGLE_APPLICATION_CREDENTIALS_ENV};
use crate::config::environment::Environment;
use crate::enums::ai_provider_error::AiProviderError;
use crate::traits::token_source::AccessTokenSource;

/// Access tokens from Google credentials, either an explicit key file or whatever
/// Application Default Credentials discovery finds.
#[derive(Clone)]
pub struct GcpTokenSource {
    provider: Arc<dyn TokenProvider>,
}

impl GcpTokenSource {
    pub fn from_key_file(path: &str) -> Result<Self, AiProviderError> {
        log::info!("🔑 Loading service account key from: {}", path);
        let account = CustomServiceAccount::from_file(path)?;

        Ok(Self {
            provider: Arc::new(account),
        })
    }

    pub async fn ambient() -> Result<Self, AiProviderError> {
        log::info!("🔑 Discovering application default credentials");
        let provider = gcp_auth::provider().await?;

        Ok(Self { provider })
    }

    /// A set `GOOGLE_APPLICATION_CREDENTIALS` is always a key file path, even when empty,
    /// so an empty value fails here the same way ADC discovery itself would.
    pub async fn from_environment(env: &Environment) -> Result<Self, AiProviderError> {
        match env.get(GOOGLE_APPLICATION_CREDENTIALS_ENV) {
            Some(path) => Self::from_key_file(path),
            None => Self::ambient().await,
        }
    }
}

#[async_trait]
impl AccessTokenSource for GcpTokenSource {
    async fn access_token(&self) -> Result<String, AiProviderError> {
        let token = self.provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
        Ok(token.as_str().to_string())
    }

    async fn project_id(&self) -> Result<Option<String>, AiProviderError> {
        match self.provider.project_id().await {
            Ok(project_id) => Ok(Some(project_id.to_string())),
            Err(e) => {
                log::debug!("Credential carries no project id: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_key_file_is_a_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let result = GcpTokenSource::from_key_file(path.to_str().unwrap());

        assert!(matches!(result, Err(AiProviderError::Credentials(_))));
    }

    #[test]
    fn malformed_key_file_is_a_credential_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ \"type\": \"service_account\" ").unwrap();

        let result = GcpTokenSource::from_key_file(file.path().to_str().unwrap());

        assert!(matches!(result, Err(AiProviderError::Credentials(_))));
    }

    #[tokio::test]
    async fn environment_key_file_takes_precedence_over_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let env = Environment::from_pairs([(
            GOOGLE_APPLICATION_CREDENTIALS_ENV,
            path.to_str().unwrap(),
        )]);

        let result = GcpTokenSource::from_environment(&env).await;

        assert!(matches!(result, Err(AiProviderError::Credentials(_))));
    }

    #[tokio::test]
    async fn empty_credentials_variable_fails_instead_of_falling_back() {
        let env = Environment::from_pairs([(GOOGLE_APPLICATION_CREDENTIALS_ENV, "")]);

        let result = GcpTokenSource::from_environment(&env).await;

        assert!(matches!(result, Err(AiProviderError::Credentials(_))));
    }
}
