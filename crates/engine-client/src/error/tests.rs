//! Unit tests for error module.

use super::*;

#[test]
fn test_rpc_error_display() {
    let error = RpcError {
        code: 10,
        message: "order not found".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("order not found"));
    assert!(display.contains("10"));
}

#[test]
fn test_rpc_error_deserialization() {
    let error: RpcError =
        serde_json::from_str(r#"{"code": 10, "message": "order not found"}"#).unwrap();

    assert_eq!(error.code, 10);
    assert_eq!(error.message, "order not found");
}

#[test]
fn test_rpc_error_code_defaults_to_zero() {
    let error: RpcError = serde_json::from_str(r#"{"message": "internal error"}"#).unwrap();

    assert_eq!(error.code, 0);
    assert_eq!(error.message, "internal error");
}

#[test]
fn test_rpc_error_requires_message() {
    let result: Result<RpcError, _> = serde_json::from_str(r#"{"code": 1}"#);

    assert!(result.is_err());
}

#[test]
fn test_rpc_variant_display() {
    let error = Error::from(RpcError {
        code: 2,
        message: "invalid argument".to_string(),
    });

    let display = format!("{}", error);
    assert!(display.contains("RPC error"));
    assert!(display.contains("invalid argument"));
}

#[test]
fn test_as_rpc() {
    let rpc = RpcError {
        code: 3,
        message: "service unavailable".to_string(),
    };
    let error = Error::Rpc(rpc.clone());

    assert_eq!(error.as_rpc(), Some(&rpc));
    assert!(Error::Status { status: 500 }.as_rpc().is_none());
}

#[test]
fn test_status_error_display() {
    let error = Error::Status { status: 502 };

    let display = format!("{}", error);
    assert!(display.contains("502"));
}

#[test]
fn test_extraction_error_display() {
    let error = Error::Extraction("key must be a string".to_string());

    let display = format!("{}", error);
    assert!(display.contains("unable to extract arguments"));
    assert!(display.contains("key must be a string"));
}

#[test]
fn test_decode_error_display() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = Error::Decode(json_err);

    assert!(format!("{}", error).contains("unable to decode response"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_is_pre_network() {
    assert!(Error::Extraction("bad".to_string()).is_pre_network());
    assert!(!Error::Status { status: 500 }.is_pre_network());

    let url_err = url::Url::parse("http://").unwrap_err();
    assert!(Error::InvalidUrl(url_err).is_pre_network());
}

#[test]
fn test_error_debug() {
    let error = Error::Status { status: 500 };

    let debug = format!("{:?}", error);
    assert!(debug.contains("Status"));
    assert!(debug.contains("500"));
}
