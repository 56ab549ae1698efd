//! Classification of HTTP-200 response bodies into the error taxonomy.

use serde_json::Value;

use super::error::ApiError;
use super::ApiPayload;

/// The API's internal success sentinel, carried in the envelope `code`.
pub(crate) const BUSINESS_SUCCESS_CODE: i64 = 200;

/// Classifies a raw response body received with HTTP status 200.
///
/// Decision order: JSON-object shape first, then `code` usability, then
/// the business-code comparison. An envelope that is an object but lacks
/// an integer `code` is a protocol violation, not a business failure.
///
/// Pure function of the body; classifying the same bytes twice yields
/// the same outcome.
///
/// # Errors
///
/// - [`ApiError::Inner`] when the body is not a JSON object or has no
///   usable integer `code` field.
/// - [`ApiError::Business`] when `code` differs from the success
///   sentinel, carrying the remote `code` and `desc`.
pub(crate) fn classify(raw: &[u8]) -> Result<ApiPayload, ApiError> {
    let Ok(Value::Object(envelope)) = serde_json::from_slice::<Value>(raw) else {
        return Err(ApiError::inner(raw));
    };

    let Some(code) = envelope.get("code").and_then(Value::as_i64) else {
        tracing::warn!("response envelope has no usable `code` field");
        return Err(ApiError::inner(raw));
    };

    if code == BUSINESS_SUCCESS_CODE {
        return Ok(envelope);
    }

    let desc = envelope
        .get("desc")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Err(ApiError::Business { code, desc })
}
