//! Signed bearer tokens of the form `<payload>.<signature>`.
//!
//! The payload segment is the standard-base64 encoding of the canonical JSON
//! object `{"subject": ..., "data": ...}`. The signature segment is the
//! standard-base64 encoding of HMAC-SHA256 over the payload segment's ASCII
//! bytes, keyed with the caller's secret. Both functions are pure; the secret
//! is supplied on every call and never retained.

use crate::{EncodedToken, Result as TokenErrorResult, TokenError, TokenPayload};

use acct_core::ErrorLocation;

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use log::debug;
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

const SEGMENT_SEPARATOR: char = '.';

/// Mint a token carrying `subject` and `data`, signed with `secret_key`.
///
/// Equal inputs always produce the same token.
pub fn encode_token(subject: &str, data: Value, secret_key: impl AsRef<[u8]>) -> EncodedToken {
    let payload = TokenPayload::new(subject, data);
    let encoded_payload = STANDARD.encode(payload.to_canonical_json());
    let signature = sign(&encoded_payload, secret_key.as_ref());

    EncodedToken {
        token: format!("{encoded_payload}{SEGMENT_SEPARATOR}{signature}"),
        context: None,
    }
}

/// Verify `token` against `secret_key` and return its payload.
///
/// The signature is checked before the payload segment is decoded, so any
/// alteration of either segment reports `InvalidSignature`. A payload that is
/// correctly signed but not base64/JSON reports `MalformedToken`.
#[track_caller]
pub fn decode_token(token: &str, secret_key: impl AsRef<[u8]>) -> TokenErrorResult<TokenPayload> {
    let (encoded_payload, signature) = token
        .split_once(SEGMENT_SEPARATOR)
        .ok_or_else(|| malformed("missing '.' separator"))?;

    if encoded_payload.is_empty() {
        return Err(malformed("empty payload segment"));
    }
    if signature.is_empty() {
        return Err(malformed("empty signature segment"));
    }

    let expected_signature = sign(encoded_payload, secret_key.as_ref());
    let signature_matches: bool = expected_signature
        .as_bytes()
        .ct_eq(signature.as_bytes())
        .into();

    if !signature_matches {
        debug!("Rejected token: signature mismatch");
        return Err(TokenError::InvalidSignature {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let payload_bytes = STANDARD
        .decode(encoded_payload)
        .map_err(|e| malformed(format!("payload is not valid base64: {e}")))?;

    serde_json::from_slice::<TokenPayload>(&payload_bytes)
        .map_err(|e| malformed(format!("payload is not a valid token payload: {e}")))
}

pub(crate) fn sign(message: &str, secret_key: &[u8]) -> String {
    let mut mac = hmac(secret_key);
    mac.update(message.as_bytes());

    STANDARD.encode(mac.finalize().into_bytes())
}

fn hmac(secret_key: &[u8]) -> HmacSha256 {
    // Keys of any length are valid, including empty
    <HmacSha256 as Mac>::new_from_slice(secret_key).expect("HMAC accepts keys of any length")
}

#[track_caller]
fn malformed(message: impl Into<String>) -> TokenError {
    let message = message.into();
    debug!("Rejected token: {message}");

    TokenError::MalformedToken {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
