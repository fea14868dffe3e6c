use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COLLECTION_DOMAIN, DEFAULT_COLLECTION_SUBDOMAIN,
};

use serde::Deserialize;

/// The `(domain, subdomain)` pair naming the account collection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub domain: String,
    pub subdomain: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            domain: String::from(DEFAULT_COLLECTION_DOMAIN),
            subdomain: String::from(DEFAULT_COLLECTION_SUBDOMAIN),
        }
    }
}

impl CollectionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_component("collection.domain", &self.domain)?;
        Self::validate_component("collection.subdomain", &self.subdomain)?;
        Ok(())
    }

    fn validate_component(field: &str, value: &str) -> ConfigErrorResult<()> {
        if value.is_empty() {
            return Err(ConfigError::collection(format!("{field} cannot be empty")));
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::collection(format!(
                "{field} must contain only ASCII letters, digits and '_', got '{value}'"
            )));
        }

        Ok(())
    }
}
