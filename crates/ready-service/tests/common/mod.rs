#![allow(dead_code)]

use std::sync::Mutex;

use ready_core::backend::{ProcedureArgs, StockBackend};
use ready_core::entities::{Item, Profile, Transaction};
use ready_core::errors::BackendError;
use ready_core::history::{HistoryPage, HistoryQuery};
use ready_core::identity::Actor;
use ready_core::inputs::{ItemPatch, NewItem, NewTransaction};
use ready_db::StockDb;
use ready_service::StockService;

pub const CLERK: &str = "clerk@example.com";

pub async fn memory_db() -> StockDb {
    StockDb::open_local(":memory:").await.unwrap()
}

pub async fn service() -> StockService<StockDb> {
    StockService::new(memory_db().await, Actor::with_email(CLERK))
}

/// Insert an item directly, without a CREATE log row.
pub async fn seed_item(db: &StockDb, name: &str, quantity: i64, min_quantity: i64) -> Item {
    db.insert_item(&NewItem::new(name, quantity, min_quantity))
        .await
        .unwrap()
}

/// Wraps a local database and injects failures at chosen points.
pub struct ScriptedBackend {
    pub inner: StockDb,
    /// Returned from every procedure call instead of running it.
    pub procedure_error: Option<BackendError>,
    pub fail_quantity_update: bool,
    pub fail_transaction_insert: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedBackend {
    pub fn new(inner: StockDb) -> Self {
        Self {
            inner,
            procedure_error: None,
            fail_quantity_update: false,
            fail_transaction_insert: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn clone_error(error: &BackendError) -> BackendError {
    match error {
        BackendError::Procedure {
            name,
            code,
            message,
        } => BackendError::Procedure {
            name: name.clone(),
            code: code.clone(),
            message: message.clone(),
        },
        BackendError::InsufficientStock {
            available,
            requested,
        } => BackendError::InsufficientStock {
            available: *available,
            requested: *requested,
        },
        other => BackendError::Transport(other.to_string()),
    }
}

impl StockBackend for ScriptedBackend {
    async fn call_procedure(&self, name: &str, args: &ProcedureArgs) -> Result<(), BackendError> {
        self.record("call_procedure");
        if let Some(ref error) = self.procedure_error {
            return Err(clone_error(error));
        }
        StockBackend::call_procedure(&self.inner, name, args).await
    }

    async fn fetch_item(&self, id: i64) -> Result<Item, BackendError> {
        self.record("fetch_item");
        StockBackend::fetch_item(&self.inner, id).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        self.record("list_items");
        StockBackend::list_items(&self.inner).await
    }

    async fn insert_item(&self, item: &NewItem) -> Result<Item, BackendError> {
        self.record("insert_item");
        StockBackend::insert_item(&self.inner, item).await
    }

    async fn update_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, BackendError> {
        self.record("update_item");
        if self.fail_quantity_update && patch.quantity.is_some() {
            return Err(BackendError::Transport("connection reset".into()));
        }
        StockBackend::update_item(&self.inner, id, patch).await
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, BackendError> {
        self.record("insert_transaction");
        if self.fail_transaction_insert {
            return Err(BackendError::Rejected {
                status: 403,
                message: "new row violates row-level security policy".into(),
            });
        }
        StockBackend::insert_transaction(&self.inner, tx).await
    }

    async fn query_transactions(&self, query: &HistoryQuery) -> Result<HistoryPage, BackendError> {
        self.record("query_transactions");
        StockBackend::query_transactions(&self.inner, query).await
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        self.record("fetch_profile");
        StockBackend::fetch_profile(&self.inner, user_id).await
    }
}

pub fn scripted_service(backend: ScriptedBackend) -> StockService<ScriptedBackend> {
    StockService::new(backend, Actor::with_email(CLERK))
}
