//! Shared HTTP response helpers for the REST backend.
//!
//! Centralizes status-code checks (non-success → [`RemoteError::Api`] with the
//! backend's `{code, message, details, hint}` body decoded when present) and
//! `Content-Range` parsing for exact-count pagination.

use serde::Deserialize;

use crate::error::RemoteError;

/// Error body returned by the backend on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

/// Build an [`RemoteError::Api`] from a status and raw body.
pub(crate) fn api_error(status: u16, body: &str) -> RemoteError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if parsed.message.is_some() || parsed.code.is_some() => {
            let mut message = parsed.message.unwrap_or_default();
            if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
                message = format!("{message} ({details})");
            }
            if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
                message = format!("{message}; hint: {hint}");
            }
            RemoteError::Api {
                status,
                code: parsed.code,
                message,
            }
        }
        _ => RemoteError::Api {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}

/// Parse the total out of a `Content-Range` value such as `0-9/57` or `*/0`.
///
/// Returns `None` when the total is unknown (`0-9/*`) or the header is malformed.
#[must_use]
pub fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}

/// Read the exact total from a response's `Content-Range` header.
pub(crate) fn content_range_total(resp: &reqwest::Response) -> Result<u64, RemoteError> {
    let header = resp
        .headers()
        .get(reqwest::header::CONTENT_RANGE)
        .ok_or_else(|| RemoteError::Parse("missing Content-Range header".into()))?;
    let value = header
        .to_str()
        .map_err(|e| RemoteError::Parse(format!("Content-Range is not ASCII: {e}")))?;
    parse_content_range_total(value)
        .ok_or_else(|| RemoteError::Parse(format!("Content-Range without total: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_range(status: u16, range: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Content-Range", range)
                .body("[]")
                .unwrap(),
        )
    }

    #[rstest]
    #[case("0-9/57", Some(57))]
    #[case("*/0", Some(0))]
    #[case("10-19/20", Some(20))]
    #[case("0-9/*", None)]
    #[case("garbage", None)]
    fn content_range_totals(#[case] value: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_content_range_total(value), expected);
    }

    #[test]
    fn content_range_from_response() {
        let resp = mock_response_with_range(206, "0-1/3");
        assert_eq!(content_range_total(&resp).unwrap(), 3);
    }

    #[test]
    fn missing_content_range_is_parse_error() {
        let resp = mock_response(200, "[]");
        assert!(matches!(
            content_range_total(&resp),
            Err(RemoteError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_partial_content_is_success() {
        let resp = mock_response_with_range(206, "0-9/20");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_decodes_error_body() {
        let resp = mock_response(
            404,
            r#"{"code":"PGRST202","message":"Could not find the function public.withdraw_item","details":null,"hint":"Perhaps you meant receive_item"}"#,
        );
        let err = check_response(resp).await.unwrap_err();
        match err {
            RemoteError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("PGRST202"));
                assert!(message.starts_with("Could not find the function"));
                assert!(message.contains("hint: Perhaps you meant receive_item"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_keeps_plain_body() {
        let resp = mock_response(502, "bad gateway");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::Api { status: 502, code: None, ref message } if message == "bad gateway"
        ));
    }
}
