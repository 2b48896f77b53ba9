//! Paginated, filterable history of the transaction log.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::entities::TransactionWithItem;
use crate::enums::ActionType;
use crate::errors::CoreError;

/// A history page request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub page: u32,
    pub page_size: u32,
    /// Equality filter on `action_type`; `None` means all actions.
    pub filter: Option<ActionType>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: None,
        }
    }
}

impl HistoryQuery {
    #[must_use]
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            filter: None,
        }
    }

    #[must_use]
    pub const fn with_filter(mut self, filter: Option<ActionType>) -> Self {
        self.filter = filter;
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `page` or `page_size` is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page == 0 {
            return Err(CoreError::Validation("page starts at 1".into()));
        }
        if self.page_size == 0 {
            return Err(CoreError::Validation("page_size must be positive".into()));
        }
        Ok(())
    }

    /// Inclusive row range `(from, to)` covered by this page.
    #[must_use]
    pub fn range(&self) -> (u64, u64) {
        let size = u64::from(self.page_size.max(1));
        let from = u64::from(self.page.max(1) - 1) * size;
        (from, from + size - 1)
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.range().0
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size.max(1))
    }
}

/// Parse a history filter as typed on the command line. `all` means no filter.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the value names no action.
pub fn parse_action_filter(raw: &str) -> Result<Option<ActionType>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    ActionType::parse(trimmed).map(Some)
}

/// One page of history plus the exact count of matching rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryPage {
    pub rows: Vec<TransactionWithItem>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl HistoryPage {
    #[must_use]
    pub const fn empty(query: &HistoryQuery) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            page: query.page,
            page_size: query.page_size,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> u64 {
        let size = u64::from(self.page_size.max(1));
        self.total.div_ceil(size)
    }
}
