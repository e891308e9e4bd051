//! Failure classification.
//!
//! Every way a dispatch can go wrong is first narrowed into one of the
//! [`Failure`] shapes, then matched into the closed [`ErrorKind`] taxonomy.
//! Classification is a pure function; nothing here touches the network.

use serde_json::Value;

use crate::error::{ApiError, ErrorKind, RequestContext};

/// The fixed set of failure shapes a dispatch can produce.
#[derive(Debug)]
pub(crate) enum Failure {
    /// Completed HTTP exchange with a non-success status and a normalized
    /// error payload.
    Status { status: u16, error: Value },
    /// Structured error payload with no HTTP status attached.
    Payload(Value),
    /// The transport gave up waiting.
    Timeout(String),
    /// The connection was refused or closed unexpectedly.
    ConnectionClosed(String),
    /// A free-form transport failure reason.
    Reason(String),
    /// Anything the transport reported that fits none of the above.
    Other(String),
}

/// Turn a failure shape into a classified [`ApiError`].
///
/// Priority: a numeric status wins; otherwise a `type`/`code` hint in the
/// payload; otherwise the transport-level shape decides.
pub(crate) fn classify(failure: Failure, context: RequestContext) -> ApiError {
    match failure {
        Failure::Status { status, error } => {
            let kind =
                ErrorKind::from_status(status).unwrap_or_else(|| kind_from_payload(&error));
            ApiError {
                kind,
                message: extract_message(&error),
                status: Some(status),
                details: payload_details(error),
                request_context: Some(context),
            }
        }
        Failure::Payload(error) => ApiError {
            kind: kind_from_payload(&error),
            message: extract_message(&error),
            status: None,
            details: payload_details(error),
            request_context: Some(context),
        },
        Failure::Timeout(reason) => ApiError {
            kind: ErrorKind::Timeout,
            message: reason,
            status: None,
            details: None,
            request_context: Some(context),
        },
        Failure::ConnectionClosed(reason) => ApiError {
            kind: ErrorKind::NetworkError,
            message: reason,
            status: None,
            details: None,
            request_context: Some(context),
        },
        Failure::Reason(reason) => ApiError {
            kind: ErrorKind::Unknown,
            message: reason,
            status: None,
            details: None,
            request_context: Some(context),
        },
        Failure::Other(raw) => ApiError {
            kind: ErrorKind::Unknown,
            message: format!("unrecognized failure: {raw}"),
            status: None,
            details: None,
            request_context: Some(context),
        },
    }
}

/// Infer a taxonomy member from a `type` or `code` field in the payload.
fn kind_from_payload(payload: &Value) -> ErrorKind {
    payload
        .get("type")
        .or_else(|| payload.get("code"))
        .and_then(Value::as_str)
        .and_then(ErrorKind::from_hint)
        .unwrap_or(ErrorKind::Unknown)
}

/// Extract a human-readable message from a structured error payload.
///
/// Priority: `message` field, `error` string field, joined `errors` list,
/// then a fallback embedding the raw payload.
pub(crate) fn extract_message(payload: &Value) -> String {
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
        return errors
            .iter()
            .map(|entry| match entry {
                Value::String(s) => s.clone(),
                other => extract_message(other),
            })
            .collect::<Vec<_>>()
            .join(", ");
    }
    format!("unrecognized error payload: {payload}")
}

/// Keep the structured payload around for callers, unless there is none.
fn payload_details(payload: Value) -> Option<Value> {
    match payload {
        Value::Null => None,
        other => Some(other),
    }
}
