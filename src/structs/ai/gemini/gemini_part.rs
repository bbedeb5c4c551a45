use serde::{Deserialize, Serialize};

/// A content part. Text is the only kind sent; anything else the service returns
/// (function calls, inline data, ...) is kept in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extra: serde_json::Map::new(),
        }
    }
}
