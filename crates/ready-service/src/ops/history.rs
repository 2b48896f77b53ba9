//! History pages and dashboard statistics.

use ready_core::backend::StockBackend;
use ready_core::entities::TransactionWithItem;
use ready_core::history::{HistoryPage, HistoryQuery};
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::ServiceError;
use crate::service::StockService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DashboardStats {
    /// Active items.
    pub total_items: u64,
    /// Sum of quantities over active items.
    pub total_quantity: i64,
    /// Active items at or below their reorder threshold.
    pub low_stock_count: u64,
    /// Newest transactions, newest first.
    pub recent_transactions: Vec<TransactionWithItem>,
}

impl<B: StockBackend> StockService<B> {
    /// One page of the transaction log, newest first.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Core` if `page` or `page_size` is zero.
    /// - `ServiceError::Backend` if the backend read fails.
    pub async fn history(&self, query: HistoryQuery) -> Result<HistoryPage, ServiceError> {
        query.validate()?;
        if let Some(page) = self.cache().history(&query) {
            tracing::debug!(page = query.page, "history page served from cache");
            return Ok(page);
        }
        let page = self.backend().query_transactions(&query).await?;
        self.cache().store_history(query, &page);
        Ok(page)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Backend` if a backend read fails.
    pub async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        let items = self.list_items().await?;
        let recent = self
            .history(HistoryQuery::page(1, self.recent_limit()))
            .await?;

        Ok(DashboardStats {
            total_items: items.len() as u64,
            total_quantity: items.iter().map(|item| item.quantity).sum(),
            low_stock_count: items.iter().filter(|item| item.is_low_stock()).count() as u64,
            recent_transactions: recent.rows,
        })
    }
}
