use crate::config::constants::{
    DEFAULT_LOCATION, GLOBAL_LOCATION, GOOGLE_CLOUD_LOCATION_ENV, GOOGLE_CLOUD_PROJECT_ENV,
};
use crate::config::environment::Environment;

/// Where requests are sent: project, region and the host serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexConfig {
    /// `None` defers to the project recorded in the credential.
    pub project_id: Option<String>,
    pub location: String,
    pub endpoint: Option<String>,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: DEFAULT_LOCATION.to_string(),
            endpoint: None,
        }
    }
}

impl VertexConfig {
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            project_id: env.get_non_empty(GOOGLE_CLOUD_PROJECT_ENV).map(str::to_string),
            location: env
                .get_non_empty(GOOGLE_CLOUD_LOCATION_ENV)
                .unwrap_or(DEFAULT_LOCATION)
                .to_string(),
            endpoint: None,
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None if self.location == GLOBAL_LOCATION => "https://aiplatform.googleapis.com".to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    pub fn generate_content_url(&self, project_id: &str, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url(),
            project_id,
            self.location,
            model
        )
    }
}
