use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Parses raw oracle text into `T`.
///
/// Empty text, text that is not JSON, and JSON whose shape cannot be coerced
/// into `T` all fail with [`CoreError::MalformedResponse`]; nothing here falls
/// back to a default value.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    let json_text = raw.trim();
    if json_text.is_empty() {
        tracing::error!("Oracle returned an empty response");
        return Err(CoreError::MalformedResponse("empty response".to_string()));
    }

    let value: Value = serde_json::from_str(json_text).map_err(|e| {
        tracing::error!("Failed to parse oracle response as JSON: {}", e);
        tracing::debug!("Unparseable oracle response: {}", json_text);
        CoreError::MalformedResponse(format!("invalid JSON: {}", e))
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Oracle response does not match the expected shape: {}", e);
        CoreError::MalformedResponse(format!("unexpected shape: {}", e))
    })
}
