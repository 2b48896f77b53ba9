use ready_config::BackendKind;
use ready_core::backend::{ProcedureArgs, StockBackend};
use ready_core::entities::{Item, Profile, Transaction};
use ready_core::errors::BackendError;
use ready_core::history::{HistoryPage, HistoryQuery};
use ready_core::inputs::{ItemPatch, NewItem, NewTransaction};
use ready_db::StockDb;
use ready_remote::RestBackend;

/// The backend selected by `backend.kind`.
pub enum AnyBackend {
    Local(StockDb),
    Remote(RestBackend),
}

impl AnyBackend {
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Local(_) => BackendKind::Local,
            Self::Remote(_) => BackendKind::Remote,
        }
    }
}

impl StockBackend for AnyBackend {
    async fn call_procedure(&self, name: &str, args: &ProcedureArgs) -> Result<(), BackendError> {
        match self {
            Self::Local(db) => StockBackend::call_procedure(db, name, args).await,
            Self::Remote(rest) => StockBackend::call_procedure(rest, name, args).await,
        }
    }

    async fn fetch_item(&self, id: i64) -> Result<Item, BackendError> {
        match self {
            Self::Local(db) => StockBackend::fetch_item(db, id).await,
            Self::Remote(rest) => StockBackend::fetch_item(rest, id).await,
        }
    }

    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        match self {
            Self::Local(db) => StockBackend::list_items(db).await,
            Self::Remote(rest) => StockBackend::list_items(rest).await,
        }
    }

    async fn insert_item(&self, item: &NewItem) -> Result<Item, BackendError> {
        match self {
            Self::Local(db) => StockBackend::insert_item(db, item).await,
            Self::Remote(rest) => StockBackend::insert_item(rest, item).await,
        }
    }

    async fn update_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, BackendError> {
        match self {
            Self::Local(db) => StockBackend::update_item(db, id, patch).await,
            Self::Remote(rest) => StockBackend::update_item(rest, id, patch).await,
        }
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, BackendError> {
        match self {
            Self::Local(db) => StockBackend::insert_transaction(db, tx).await,
            Self::Remote(rest) => StockBackend::insert_transaction(rest, tx).await,
        }
    }

    async fn query_transactions(&self, query: &HistoryQuery) -> Result<HistoryPage, BackendError> {
        match self {
            Self::Local(db) => StockBackend::query_transactions(db, query).await,
            Self::Remote(rest) => StockBackend::query_transactions(rest, query).await,
        }
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        match self {
            Self::Local(db) => StockBackend::fetch_profile(db, user_id).await,
            Self::Remote(rest) => StockBackend::fetch_profile(rest, user_id).await,
        }
    }
}
