use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data carried inside a signed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject identifier (typically the account id)
    pub subject: String,
    /// Arbitrary caller data; `null` is a valid value but the field must be present
    pub data: Value,
    /// Caller-defined extension object. Never written by `encode_token`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl TokenPayload {
    pub fn new(subject: impl Into<String>, data: Value) -> Self {
        Self {
            subject: subject.into(),
            data,
            context: None,
        }
    }

    /// Canonical JSON text: compact, object keys in sorted order.
    pub(crate) fn to_canonical_json(&self) -> String {
        let mut object = Map::new();
        object.insert("subject".to_string(), Value::String(self.subject.clone()));
        object.insert("data".to_string(), self.data.clone());
        if let Some(context) = &self.context {
            object.insert("context".to_string(), Value::Object(context.clone()));
        }

        let mut value = Value::Object(object);
        value.sort_all_objects();
        value.to_string()
    }
}
