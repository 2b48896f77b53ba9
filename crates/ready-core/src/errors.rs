//! Cross-cutting error types for ReadyStock.
//!
//! `CoreError` covers input validation that any crate can raise.
//! `BackendError` is the error type of the `StockBackend` seam; each backend
//! crate converts its own error (`DatabaseError`, `RemoteError`) into it.
//! `ServiceError` lives in `ready-service` where both converge.

use thiserror::Error;

/// Message fragments the backend uses when a withdrawal exceeds stock.
///
/// The hosted procedure raises a Thai message; the local backend and newer
/// procedure revisions use English.
pub const INSUFFICIENT_STOCK_MARKERS: &[&str] =
    &["สินค้าไม่พอ", "ไม่เพียงพอ", "insufficient stock"];

/// Errors that can be raised by any ReadyStock crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors surfaced by a `StockBackend` implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A named remote procedure failed or is not deployed.
    #[error("remote procedure '{name}' failed: {message}")]
    Procedure {
        name: String,
        code: Option<String>,
        message: String,
    },

    /// The backend refused a withdrawal that exceeds current stock.
    #[error("insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    /// A row addressed by id does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The backend rejected the request (policy, constraint, bad input).
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Network or connection failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response or row could not be decoded into a typed value.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl BackendError {
    /// Whether this error means a withdrawal exceeded available stock.
    ///
    /// Structured variants are checked first; otherwise the message is
    /// matched against [`INSUFFICIENT_STOCK_MARKERS`].
    #[must_use]
    pub fn indicates_insufficient_stock(&self) -> bool {
        match self {
            Self::InsufficientStock { .. } => true,
            Self::Procedure { message, .. } | Self::Rejected { message, .. } => {
                let lower = message.to_lowercase();
                INSUFFICIENT_STOCK_MARKERS
                    .iter()
                    .any(|marker| lower.contains(marker))
            }
            _ => false,
        }
    }

    /// Available quantity reported by the backend, when it reports one.
    #[must_use]
    pub const fn available_quantity(&self) -> Option<i64> {
        match self {
            Self::InsufficientStock { available, .. } => Some(*available),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
