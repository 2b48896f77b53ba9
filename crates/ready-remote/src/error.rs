//! Remote backend error types.

use ready_core::errors::BackendError;
use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend error code (`PGRST202`, `P0001`, a SQLSTATE, ...).
        code: Option<String>,
        /// Error message, or the raw body when it is not a JSON error.
        message: String,
    },

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The session access token could not be decoded.
    #[error("invalid session token: {0}")]
    Claims(String),

    /// Remote backend settings are incomplete.
    #[error("remote backend not configured: {0}")]
    NotConfigured(String),
}

impl RemoteError {
    /// Re-tag an error raised while invoking procedure `name`.
    #[must_use]
    pub fn into_procedure_error(self, name: &str) -> BackendError {
        match self {
            Self::Api { code, message, .. } => BackendError::Procedure {
                name: name.to_string(),
                code,
                message,
            },
            other => other.into(),
        }
    }
}

impl From<RemoteError> for BackendError {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Http(e) if e.is_decode() => Self::Decode(e.to_string()),
            RemoteError::Http(e) => Self::Transport(e.to_string()),
            RemoteError::Api {
                status, message, ..
            } => Self::Rejected { status, message },
            RemoteError::Parse(message) | RemoteError::Claims(message) => Self::Decode(message),
            e @ RemoteError::NotConfigured(_) => Self::Transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: &str, message: &str) -> RemoteError {
        RemoteError::Api {
            status: 400,
            code: Some(code.into()),
            message: message.into(),
        }
    }

    #[test]
    fn procedure_errors_keep_code_and_message() {
        let err = api("P0001", "สินค้าไม่พอ").into_procedure_error("withdraw_item");
        assert!(matches!(
            &err,
            BackendError::Procedure { name, code, .. }
                if name == "withdraw_item" && code.as_deref() == Some("P0001")
        ));
        assert!(err.indicates_insufficient_stock());
    }

    #[test]
    fn table_errors_become_rejections() {
        let err: BackendError = api("42501", "permission denied for table items").into();
        assert!(matches!(err, BackendError::Rejected { status: 400, .. }));
        assert!(!err.indicates_insufficient_stock());
    }

    #[test]
    fn parse_errors_become_decode() {
        let err: BackendError = RemoteError::Parse("bad Content-Range".into()).into();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
