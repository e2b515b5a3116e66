//! Extraction of provider error payloads from failed responses.

use serde_json::Value;

/// Read the body of a non-success response as the payload to surface.
///
/// JSON bodies are returned as parsed JSON, other bodies as a string. An
/// empty body yields `"Request failed with status code <n>"`.
pub async fn error_payload(response: reqwest::Response) -> Value {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    payload_from_body(status, &body)
}

fn payload_from_body(status: reqwest::StatusCode, body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::String(format!(
            "Request failed with status code {}",
            status.as_u16()
        ));
    }

    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
