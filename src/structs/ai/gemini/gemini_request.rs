use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// One `user` turn per prompt, in order.
    pub fn new(prompts: Vec<String>, generation_config: GeminiGenerationConfig) -> Self {
        Self {
            contents: prompts.into_iter().map(GeminiContent::user_text).collect(),
            generation_config,
        }
    }
}
