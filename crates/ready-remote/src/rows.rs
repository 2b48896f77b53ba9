//! Response row shapes that differ from the core entities.

use ready_core::entities::{Transaction, TransactionWithItem};
use serde::Deserialize;

/// Embedded `items(name)` resource on a transaction row.
#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddedItem {
    pub name: Option<String>,
}

/// A `transactions` row fetched with `select=*,items(name)`.
#[derive(Debug, Deserialize)]
pub(crate) struct TransactionRow {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default)]
    pub items: Option<EmbeddedItem>,
}

impl From<TransactionRow> for TransactionWithItem {
    fn from(row: TransactionRow) -> Self {
        Self {
            transaction: row.transaction,
            item_name: row.items.and_then(|item| item.name),
        }
    }
}
