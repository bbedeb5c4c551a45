use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiProviderError {
    #[error("Credential Error: {0}")]
    Credentials(#[from] gcp_auth::Error),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Vertex AI API Error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("No Google Cloud project configured; set GOOGLE_CLOUD_PROJECT or use a key file that names one")]
    MissingProject,
}

impl AiProviderError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationError(body),
            429 => Self::RateLimited(body),
            _ => Self::ApiError { status, message: body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes_to_variants() {
        assert!(matches!(
            AiProviderError::from_status(401, String::new()),
            AiProviderError::AuthenticationError(_)
        ));
        assert!(matches!(
            AiProviderError::from_status(403, String::new()),
            AiProviderError::AuthenticationError(_)
        ));
        assert!(matches!(
            AiProviderError::from_status(429, String::new()),
            AiProviderError::RateLimited(_)
        ));
        assert!(matches!(
            AiProviderError::from_status(400, "bad".to_string()),
            AiProviderError::ApiError { status: 400, .. }
        ));
    }

    #[test]
    fn api_error_message_includes_status_and_body() {
        let error = AiProviderError::from_status(500, "backend exploded".to_string());

        assert_eq!(
            error.to_string(),
            "Vertex AI API Error (HTTP 500): backend exploded"
        );
    }
}
