//! Service error types.

use ready_core::errors::{BackendError, CoreError};
use thiserror::Error;

/// Errors returned by `StockService` operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A withdrawal asked for more than the item holds. Nothing was written.
    #[error("สินค้าไม่พอ: item {item_id} has {} in stock, requested {requested}", available_label(.available))]
    InsufficientStock {
        item_id: i64,
        /// Known when the fallback read the item or the backend reported it.
        available: Option<i64>,
        requested: i64,
    },

    /// Input failed validation before any backend call.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("item {0} not found")]
    ItemNotFound(i64),

    /// One of the paired item / log writes succeeded and the other failed.
    #[error("item {item_id}: partial write, quantity and transaction log disagree")]
    PartialWrite {
        item_id: i64,
        #[source]
        source: BackendError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[allow(clippy::ref_option)]
fn available_label(available: &Option<i64>) -> String {
    available.map_or_else(|| "too little".to_string(), |n| n.to_string())
}

impl ServiceError {
    /// Errors the user can fix by changing the request.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientStock { .. }
                | Self::Validation(_)
                | Self::ItemNotFound(_)
                | Self::Core(_)
        )
    }

    /// Map a backend `NotFound` for `item_id` to [`Self::ItemNotFound`].
    pub(crate) fn from_item_lookup(item_id: i64, error: BackendError) -> Self {
        if error.is_not_found() {
            Self::ItemNotFound(item_id)
        } else {
            Self::Backend(error)
        }
    }
}
