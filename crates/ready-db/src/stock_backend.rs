use ready_core::backend::{ProcedureArgs, StockBackend};
use ready_core::entities::{Item, Profile, Transaction};
use ready_core::enums::StockDirection;
use ready_core::errors::BackendError;
use ready_core::history::{HistoryPage, HistoryQuery};
use ready_core::inputs::{ItemPatch, NewItem, NewTransaction};

use crate::StockDb;
use crate::error::DatabaseError;

fn direction_for(name: &str) -> Option<StockDirection> {
    [StockDirection::Receive, StockDirection::Withdraw]
        .into_iter()
        .find(|direction| direction.procedure() == name)
}

impl StockBackend for StockDb {
    async fn call_procedure(&self, name: &str, args: &ProcedureArgs) -> Result<(), BackendError> {
        let direction = match direction_for(name) {
            Some(direction) if self.procedures_enabled() => direction,
            _ => return Err(DatabaseError::ProcedureUnavailable(name.to_string()).into()),
        };

        match self.run_stock_procedure(direction, args).await {
            Ok(_) => Ok(()),
            Err(e @ (DatabaseError::InsufficientStock { .. } | DatabaseError::NotFound { .. })) => {
                Err(e.into())
            }
            Err(e) => Err(BackendError::Procedure {
                name: name.to_string(),
                code: None,
                message: e.to_string(),
            }),
        }
    }

    async fn fetch_item(&self, id: i64) -> Result<Item, BackendError> {
        Ok(self.get_item(id).await?)
    }

    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        Ok(self.list_active_items().await?)
    }

    async fn insert_item(&self, item: &NewItem) -> Result<Item, BackendError> {
        Ok(Self::insert_item(self, item).await?)
    }

    async fn update_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, BackendError> {
        Ok(self.patch_item(id, patch).await?)
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, BackendError> {
        Ok(Self::insert_transaction(self, tx).await?)
    }

    async fn query_transactions(&self, query: &HistoryQuery) -> Result<HistoryPage, BackendError> {
        Ok(self.query_history(query).await?)
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        Ok(self.get_profile(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    fn args(item_id: i64, amount: i64) -> ProcedureArgs {
        ProcedureArgs {
            t_item_id: item_id,
            t_amount: amount,
            t_note: None,
            t_user_email: None,
        }
    }

    #[tokio::test]
    async fn disabled_procedures_report_unavailable() {
        let db = test_db().await;
        let item = StockDb::insert_item(&db, &NewItem::new("Fuse", 2, 1))
            .await
            .unwrap();
        db.set_procedures_enabled(false);

        let err = db
            .call_procedure("receive_item", &args(item.id, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::Procedure { ref code, .. } if code.as_deref() == Some("PGRST202")
        ));
        assert!(!err.indicates_insufficient_stock());
        assert_eq!(db.get_item(item.id).await.unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn unknown_procedure_is_unavailable() {
        let db = test_db().await;
        let err = db.call_procedure("adjust_item", &args(1, 1)).await.unwrap_err();
        assert!(matches!(err, BackendError::Procedure { .. }));
    }

    #[tokio::test]
    async fn insufficient_stock_is_structured() {
        let db = test_db().await;
        let item = StockDb::insert_item(&db, &NewItem::new("Fuse", 2, 1))
            .await
            .unwrap();
        let err = db
            .call_procedure("withdraw_item", &args(item.id, 3))
            .await
            .unwrap_err();
        assert!(err.indicates_insufficient_stock());
        assert_eq!(err.available_quantity(), Some(2));
    }

    #[tokio::test]
    async fn bad_amount_surfaces_as_procedure_error() {
        let db = test_db().await;
        let item = StockDb::insert_item(&db, &NewItem::new("Fuse", 2, 1))
            .await
            .unwrap();
        let err = db
            .call_procedure("receive_item", &args(item.id, -1))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Procedure { code: None, .. }));
    }

    #[tokio::test]
    async fn missing_item_maps_to_not_found() {
        let db = test_db().await;
        let err = db.fetch_item(77).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
