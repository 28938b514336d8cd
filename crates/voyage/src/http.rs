//! Transport glue: one JSON POST per call, with Voyage's error-body
//! schema mapped into [`VoyageError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::VoyageError;
use crate::provider::ProviderConfig;

/// POST `body` to `{base_url}{path}` and return the raw 2xx JSON body.
///
/// Non-2xx responses are parsed against the `{error: {...}}` schema;
/// malformed error bodies still surface as an API error with the raw
/// body text as the message. Retry/backoff is not this crate's concern.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    config: &ProviderConfig,
    path: &str,
    body: &B,
) -> Result<Value, VoyageError> {
    let api_key = config.resolve_api_key()?;
    let url = format!("{}{}", config.base_url, path);

    debug!("Voyage request to {}", url);

    let mut request = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json");
    for (name, value) in &config.headers {
        request = request.header(name, value);
    }

    let response = request.json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(api_error(status.as_u16(), &body));
    }

    let raw: Value = response.json().await?;
    Ok(raw)
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

/// Voyage error payload is `{error: {code, message, param, type}}`; only
/// the fields that feed the surfaced error are parsed, the rest are
/// ignored.
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

fn api_error(status: u16, body: &str) -> VoyageError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => VoyageError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => VoyageError::Api {
            status,
            code: None,
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_surfaces_message_and_code() {
        let body = r#"{"error": {"code": "invalid_request_error", "message": "model not found", "param": null, "type": "invalid_request_error"}}"#;
        match api_error(400, body) {
            VoyageError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code.as_deref(), Some("invalid_request_error"));
                assert_eq!(message, "model not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_error_body_falls_back_to_raw_text() {
        match api_error(500, "upstream exploded") {
            VoyageError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 500);
                assert_eq!(code, None);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_reports_the_status() {
        match api_error(502, "") {
            VoyageError::Api { message, .. } => assert_eq!(message, "HTTP 502"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
