//! Transaction log repository: append and paginated history.

use chrono::Utc;

use ready_core::entities::{Transaction, TransactionWithItem};
use ready_core::history::{HistoryPage, HistoryQuery};
use ready_core::inputs::NewTransaction;

use crate::StockDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_action, parse_datetime};

const SELECT_COLS: &str =
    "t.id, t.item_id, t.action_type, t.amount, t.user_email, t.note, t.created_at";

fn row_to_transaction(row: &libsql::Row) -> Result<Transaction, DatabaseError> {
    Ok(Transaction {
        id: row.get(0)?,
        item_id: row.get::<Option<i64>>(1)?,
        action_type: parse_action(&row.get::<String>(2)?)?,
        amount: row.get(3)?,
        user_email: get_opt_string(row, 4)?,
        note: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl StockDb {
    pub async fn insert_transaction(
        &self,
        tx: &NewTransaction,
    ) -> Result<Transaction, DatabaseError> {
        insert_transaction_on(self.conn(), tx).await
    }

    pub async fn get_transaction(&self, id: i64) -> Result<Transaction, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM transactions t WHERE t.id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "transaction",
            id: id.to_string(),
        })?;
        row_to_transaction(&row)
    }

    /// All log rows for one item, oldest first.
    pub async fn transactions_for_item(
        &self,
        item_id: i64,
    ) -> Result<Vec<Transaction>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM transactions t WHERE t.item_id = ?1 ORDER BY t.created_at ASC, t.id ASC"
                ),
                [item_id],
            )
            .await?;

        let mut txs = Vec::new();
        while let Some(row) = rows.next().await? {
            txs.push(row_to_transaction(&row)?);
        }
        Ok(txs)
    }

    /// Newest-first page of the log joined to item names.
    pub async fn query_history(&self, query: &HistoryQuery) -> Result<HistoryPage, DatabaseError> {
        query
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let mut params: Vec<libsql::Value> = Vec::new();
        let where_clause = match query.filter {
            Some(action) => {
                params.push(action.as_str().into());
                format!("WHERE t.action_type = ?{}", params.len())
            }
            None => String::new(),
        };

        let total = {
            let mut rows = self
                .conn()
                .query(
                    &format!("SELECT COUNT(*) FROM transactions t {where_clause}"),
                    libsql::params_from_iter(params.clone()),
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            u64::try_from(row.get::<i64>(0)?)
                .map_err(|e| DatabaseError::Query(format!("negative row count: {e}")))?
        };

        let limit = i64::try_from(query.limit())
            .map_err(|e| DatabaseError::InvalidState(format!("page_size out of range: {e}")))?;
        let offset = i64::try_from(query.offset())
            .map_err(|e| DatabaseError::InvalidState(format!("page out of range: {e}")))?;
        params.push(limit.into());
        let limit_idx = params.len();
        params.push(offset.into());
        let offset_idx = params.len();

        let sql = format!(
            "SELECT {SELECT_COLS}, i.name
             FROM transactions t
             LEFT JOIN items i ON i.id = t.item_id
             {where_clause}
             ORDER BY t.created_at DESC, t.id DESC
             LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut page_rows = Vec::new();
        while let Some(row) = rows.next().await? {
            page_rows.push(TransactionWithItem {
                transaction: row_to_transaction(&row)?,
                item_name: get_opt_string(&row, 7)?,
            });
        }

        Ok(HistoryPage {
            rows: page_rows,
            total,
            page: query.page,
            page_size: query.page_size,
        })
    }
}

/// Append a log row on a connection or open transaction.
pub(crate) async fn insert_transaction_on(
    conn: &libsql::Connection,
    tx: &NewTransaction,
) -> Result<Transaction, DatabaseError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO transactions (item_id, action_type, amount, user_email, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            tx.item_id,
            tx.action_type.as_str(),
            tx.amount,
            tx.user_email.as_deref(),
            tx.note.as_deref(),
            format_datetime(&now)
        ],
    )
    .await?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, action = %tx.action_type, amount = tx.amount, "appended transaction");
    Ok(Transaction {
        id,
        item_id: tx.item_id,
        action_type: tx.action_type,
        amount: tx.amount,
        user_email: tx.user_email.clone(),
        note: tx.note.clone(),
        created_at: parse_datetime(&format_datetime(&now))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;
    use ready_core::enums::ActionType;
    use ready_core::inputs::NewItem;
    use rstest::rstest;

    fn log(item_id: Option<i64>, action_type: ActionType, amount: i64) -> NewTransaction {
        NewTransaction {
            item_id,
            action_type,
            amount,
            user_email: Some("clerk@example.com".into()),
            note: None,
        }
    }

    async fn seeded() -> (StockDb, i64) {
        let db = test_db().await;
        let item = db.insert_item(&NewItem::new("Washer", 50, 5)).await.unwrap();
        let actions = [
            (ActionType::Create, 50),
            (ActionType::Receive, 10),
            (ActionType::Withdraw, -4),
            (ActionType::Receive, 2),
            (ActionType::Update, -8),
        ];
        for (action, amount) in actions {
            db.insert_transaction(&log(Some(item.id), action, amount))
                .await
                .unwrap();
        }
        (db, item.id)
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let db = test_db().await;
        let tx = db
            .insert_transaction(&log(None, ActionType::Receive, 3))
            .await
            .unwrap();
        let fetched = db.get_transaction(tx.id).await.unwrap();
        assert_eq!(fetched, tx);
    }

    #[tokio::test]
    async fn history_is_newest_first_with_item_names() {
        let (db, _) = seeded().await;
        let page = db.query_history(&HistoryQuery::default()).await.unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].transaction.action_type, ActionType::Update);
        assert_eq!(page.rows[4].transaction.action_type, ActionType::Create);
        assert!(page
            .rows
            .iter()
            .all(|row| row.item_name.as_deref() == Some("Washer")));
    }

    #[rstest]
    #[case(1, 2, 2)]
    #[case(2, 2, 2)]
    #[case(3, 2, 1)]
    #[case(4, 2, 0)]
    #[tokio::test]
    async fn history_pages_by_offset(
        #[case] page: u32,
        #[case] size: u32,
        #[case] expected_rows: usize,
    ) {
        let (db, _) = seeded().await;
        let result = db.query_history(&HistoryQuery::page(page, size)).await.unwrap();
        assert_eq!(result.rows.len(), expected_rows);
        assert_eq!(result.total, 5);
    }

    #[tokio::test]
    async fn history_filter_is_equality_on_action_type() {
        let (db, _) = seeded().await;
        let page = db
            .query_history(&HistoryQuery::default().with_filter(Some(ActionType::Receive)))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page
            .rows
            .iter()
            .all(|row| row.transaction.action_type == ActionType::Receive));
        assert_eq!(page.rows[0].transaction.amount, 2);
    }

    #[tokio::test]
    async fn history_keeps_rows_without_item() {
        let db = test_db().await;
        db.insert_transaction(&log(None, ActionType::Delete, -1))
            .await
            .unwrap();
        let page = db.query_history(&HistoryQuery::default()).await.unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].item_name, None);
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let db = test_db().await;
        let result = db.query_history(&HistoryQuery::page(0, 10)).await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn transactions_for_item_are_oldest_first() {
        let (db, item_id) = seeded().await;
        let txs = db.transactions_for_item(item_id).await.unwrap();
        let amounts: Vec<i64> = txs.iter().map(|tx| tx.amount).collect();
        assert_eq!(amounts, vec![50, 10, -4, 2, -8]);
    }
}
