use acct_core::{ErrorKind, ErrorLocation};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token signature {location}")]
    InvalidSignature { location: ErrorLocation },
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedToken { .. } => ErrorKind::MalformedToken,
            Self::InvalidSignature { .. } => ErrorKind::InvalidSignature,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
