//! Wire shapes exchanged with the backend and the rules for reading its
//! `{success, ...}` envelopes.

use serde::de::DeserializeOwned;

use crate::error::ReportError;

pub mod catalog;
pub mod reports;

/// Turns a raw HTTP response into the expected envelope.
///
/// 401/403 always end up as [`ReportError::Auth`], carrying the server message
/// when the body has one. Any other status is judged by the body alone: the
/// backend answers rejections with a 4xx and a regular envelope.
pub fn classify<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ReportError> {
    let unauthorized = matches!(status, 401 | 403);
    match serde_json::from_str::<T>(body) {
        Ok(_) if unauthorized => Err(ReportError::Auth(
            server_message(body).unwrap_or_else(|| format!("HTTP {status}")),
        )),
        Ok(envelope) => Ok(envelope),
        Err(_) if unauthorized => Err(ReportError::Auth(format!("HTTP {status}"))),
        Err(err) => Err(ReportError::Network(format!(
            "unexpected response (HTTP {status}): {err}"
        ))),
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|m| m.as_str()))
        .map(str::to_string)
}
