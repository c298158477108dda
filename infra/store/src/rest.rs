//! Wire details of the REST interface.

use crate::error::StoreError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

pub(crate) const API_KEY: &str = "apikey";
pub(crate) const PREFER: &str = "Prefer";
pub(crate) const RETURN_MINIMAL: &str = "return=minimal";

/// Error document returned by the REST layer (`{ code, message, details, hint }`).
///
/// The gateway in front of it sometimes answers `{ "code": 401, "msg": ... }` or
/// `{ "error": ... }` instead, so every field is optional and the auxiliary ones
/// accept any JSON value.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<Value>,
    msg: Option<Value>,
    error: Option<Value>,
    code: Option<Value>,
    details: Option<Value>,
    hint: Option<Value>,
}

/// Renders a JSON value as text: strings as-is, `null` as absent, anything else as JSON.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Turns a non-success response into [`StoreError::Rejected`].
///
/// The user-visible message is the store's `message` verbatim; with an unreadable body it
/// falls back to the HTTP reason phrase.
pub(crate) fn rejection(status: StatusCode, payload: &[u8]) -> StoreError {
    let body = serde_json::from_slice::<ErrorBody>(payload).unwrap_or_default();

    let message = text(body.message)
        .or_else(|| text(body.msg))
        .or_else(|| text(body.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_owned());

    let context = match (text(body.details), text(body.hint)) {
        (Some(details), Some(hint)) => Some(format!("{details}; hint: {hint}").into()),
        (Some(details), None) => Some(details.into()),
        (None, Some(hint)) => Some(format!("hint: {hint}").into()),
        (None, None) => None,
    };

    StoreError::Rejected { message: message.into(), status: status.as_u16(), code: text(body.code), context }
}
