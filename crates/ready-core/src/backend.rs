//! The storage seam between the stock service and a concrete backend.
//!
//! A backend exposes table-level reads and writes on `items`,
//! `transactions`, and `profiles`, plus invocation of named remote
//! procedures. Implementations: `ready_db::StockDb` (local libSQL, which
//! emulates the procedures) and `ready_remote::RestBackend` (hosted
//! PostgREST-style service).

use serde::{Deserialize, Serialize};

use crate::entities::{Item, Profile, Transaction};
use crate::errors::BackendError;
use crate::history::{HistoryPage, HistoryQuery};
use crate::inputs::{ItemPatch, NewItem, NewTransaction};

/// Arguments of the `receive_item` / `withdraw_item` procedures.
///
/// Field names are the procedures' parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureArgs {
    pub t_item_id: i64,
    /// Always positive; the procedure signs the logged amount.
    pub t_amount: i64,
    pub t_note: Option<String>,
    pub t_user_email: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait StockBackend {
    /// Invoke a named remote procedure.
    async fn call_procedure(&self, name: &str, args: &ProcedureArgs) -> Result<(), BackendError>;

    /// Fetch one item by id, deleted or not.
    async fn fetch_item(&self, id: i64) -> Result<Item, BackendError>;

    /// Active items ordered by name ascending.
    async fn list_items(&self) -> Result<Vec<Item>, BackendError>;

    async fn insert_item(&self, item: &NewItem) -> Result<Item, BackendError>;

    /// Apply a column patch and return the updated row.
    async fn update_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, BackendError>;

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, BackendError>;

    /// Newest-first page of the log joined to item names.
    async fn query_transactions(&self, query: &HistoryQuery) -> Result<HistoryPage, BackendError>;

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError>;
}
