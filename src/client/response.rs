//! Success-envelope unwrapping.

use serde_json::Value;

use crate::error::ApiError;

/// Extract a named field from a successful envelope.
///
/// Errors pass through untouched. A missing wrapper key is not a failure;
/// the body is returned as-is so callers degrade gracefully when an endpoint
/// stops (or starts) wrapping its payload.
pub(crate) fn unwrap_field(
    result: Result<Value, ApiError>,
    data_key: Option<&str>,
) -> Result<Value, ApiError> {
    let mut body = result?;
    let Some(key) = data_key else {
        return Ok(body);
    };
    let extracted = body.as_object_mut().and_then(|map| map.remove(key));
    Ok(extracted.unwrap_or(body))
}
