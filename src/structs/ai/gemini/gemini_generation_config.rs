use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_K, DEFAULT_TOP_P,
};

/// Sampling parameters sent with every request. Range checks are left to the service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GeminiGenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_uses_fixed_values() {
        let config = GeminiGenerationConfig::default();

        assert_eq!(config.max_output_tokens, 2048);
        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.top_k, 32);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(GeminiGenerationConfig::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "maxOutputTokens": 2048,
                "temperature": 0.4,
                "topP": 1.0,
                "topK": 32
            })
        );
    }
}
