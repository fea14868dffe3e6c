use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of failure kinds surfaced to callers of the store and the
/// token codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Requested account identifier has no matching record
    NotFound,
    /// Any I/O or database failure during fetch or upsert
    StorageError,
    /// Token does not split into two non-empty segments, or its payload is
    /// not valid base64/JSON
    MalformedToken,
    /// Signature segment does not match the recomputed value
    InvalidSignature,
}

impl ErrorKind {
    /// String tag, as used by callers that discriminate on plain strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::StorageError => "StorageError",
            Self::MalformedToken => "MalformedToken",
            Self::InvalidSignature => "InvalidSignature",
        }
    }

    /// Stable upper-snake code for client-facing error payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::StorageError => "STORAGE_ERROR",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::InvalidSignature => "INVALID_SIGNATURE",
        }
    }
}

impl FromStr for ErrorKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "NotFound" => Ok(Self::NotFound),
            "StorageError" => Ok(Self::StorageError),
            "MalformedToken" => Ok(Self::MalformedToken),
            "InvalidSignature" => Ok(Self::InvalidSignature),
            _ => Err(CoreError::InvalidErrorKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
