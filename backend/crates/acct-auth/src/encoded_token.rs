use serde::Serialize;
use serde_json::{Map, Value};

/// Result of `encode_token`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedToken {
    /// `<base64 payload>.<base64 signature>`
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl EncodedToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}
