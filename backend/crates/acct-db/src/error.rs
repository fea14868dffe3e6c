use acct_core::{ErrorKind, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Record not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Malformed document: {source} {location}")]
    Document {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid collection name component: '{value}' {location}")]
    InvalidCollection {
        value: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Everything except a missing record is reported as a storage failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Sqlx { .. }
            | Self::Document { .. }
            | Self::Initialization { .. }
            | Self::InvalidCollection { .. } => ErrorKind::StorageError,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
