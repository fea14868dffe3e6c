use crate::{DbError, Result as DbErrorResult};

use acct_config::CollectionConfig;
use acct_core::ErrorLocation;

use std::panic::Location;

/// A collection addressed by `(domain, subdomain)`, e.g. `user/info`.
///
/// Components are ASCII letters, digits and `_`, compared case-insensitively
/// (they are stored lowercased). The backing table is `"<domain>.<subdomain>"`;
/// `.` cannot appear in a component, so distinct names never share a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName {
    domain: String,
    subdomain: String,
}

impl CollectionName {
    #[track_caller]
    pub fn new(domain: impl Into<String>, subdomain: impl Into<String>) -> DbErrorResult<Self> {
        Ok(Self {
            domain: Self::component(domain.into())?,
            subdomain: Self::component(subdomain.into())?,
        })
    }

    #[track_caller]
    pub fn from_config(config: &CollectionConfig) -> DbErrorResult<Self> {
        Self::new(config.domain.as_str(), config.subdomain.as_str())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// Quoted SQL identifier of the backing table
    pub fn table_identifier(&self) -> String {
        format!("\"{}.{}\"", self.domain, self.subdomain)
    }

    #[track_caller]
    fn component(value: String) -> DbErrorResult<String> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DbError::InvalidCollection {
                value,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(value.to_ascii_lowercase())
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.domain, self.subdomain)
    }
}
