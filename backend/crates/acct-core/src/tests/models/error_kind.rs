use crate::{CoreError, ErrorKind};

use std::str::FromStr;

#[test]
fn test_error_kind_as_str() {
    assert_eq!(ErrorKind::NotFound.as_str(), "NotFound");
    assert_eq!(ErrorKind::StorageError.as_str(), "StorageError");
    assert_eq!(ErrorKind::MalformedToken.as_str(), "MalformedToken");
    assert_eq!(ErrorKind::InvalidSignature.as_str(), "InvalidSignature");
}

#[test]
fn test_error_kind_code() {
    assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
    assert_eq!(ErrorKind::StorageError.code(), "STORAGE_ERROR");
    assert_eq!(ErrorKind::MalformedToken.code(), "MALFORMED_TOKEN");
    assert_eq!(ErrorKind::InvalidSignature.code(), "INVALID_SIGNATURE");
}

#[test]
fn test_error_kind_from_str() {
    for kind in [
        ErrorKind::NotFound,
        ErrorKind::StorageError,
        ErrorKind::MalformedToken,
        ErrorKind::InvalidSignature,
    ] {
        assert_eq!(ErrorKind::from_str(kind.as_str()).unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_error_kind_from_str_rejects_unknown_tags() {
    let result = ErrorKind::from_str("not_found");

    assert!(matches!(
        result,
        Err(CoreError::InvalidErrorKind { ref value, .. }) if value == "not_found"
    ));
}
