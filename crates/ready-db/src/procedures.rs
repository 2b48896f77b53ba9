//! Local emulation of the `receive_item` / `withdraw_item` procedures.
//!
//! Each call reads the item, checks stock, appends the log row and writes the
//! new quantity inside one SQL transaction, so the pairing of quantity
//! change and log row holds exactly as it does on the hosted backend.

use ready_core::backend::ProcedureArgs;
use ready_core::enums::StockDirection;
use ready_core::inputs::NewTransaction;

use crate::StockDb;
use crate::error::DatabaseError;
use crate::repos::transaction::insert_transaction_on;

impl StockDb {
    /// Run a stock procedure atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::InvalidState` if `t_amount` is not positive or the
    ///   new quantity would overflow.
    /// - `DatabaseError::NotFound` if the item is missing or soft-deleted.
    /// - `DatabaseError::InsufficientStock` if a withdrawal exceeds stock.
    pub(crate) async fn run_stock_procedure(
        &self,
        direction: StockDirection,
        args: &ProcedureArgs,
    ) -> Result<i64, DatabaseError> {
        let tx = self.conn().transaction().await?;
        match apply_movement(&tx, direction, args).await {
            Ok(quantity) => {
                tx.commit().await?;
                tracing::debug!(
                    item_id = args.t_item_id,
                    %direction,
                    amount = args.t_amount,
                    quantity,
                    "stock procedure committed"
                );
                Ok(quantity)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(
                        item_id = args.t_item_id,
                        error = %rollback,
                        "stock procedure rollback failed"
                    );
                }
                Err(e)
            }
        }
    }
}

async fn apply_movement(
    conn: &libsql::Connection,
    direction: StockDirection,
    args: &ProcedureArgs,
) -> Result<i64, DatabaseError> {
    if args.t_amount <= 0 {
        return Err(DatabaseError::InvalidState(format!(
            "t_amount must be positive (got {})",
            args.t_amount
        )));
    }

    let mut rows = conn
        .query(
            "SELECT quantity FROM items WHERE id = ?1 AND is_deleted = 0",
            [args.t_item_id],
        )
        .await?;
    let current: i64 = rows
        .next()
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "item",
            id: args.t_item_id.to_string(),
        })?
        .get(0)?;
    drop(rows);

    if direction == StockDirection::Withdraw && current < args.t_amount {
        return Err(DatabaseError::InsufficientStock {
            available: current,
            requested: args.t_amount,
        });
    }

    let signed = direction.signed(args.t_amount);
    let next = current.checked_add(signed).ok_or_else(|| {
        DatabaseError::InvalidState(format!(
            "quantity {current} cannot take {signed} more units"
        ))
    })?;
    insert_transaction_on(
        conn,
        &NewTransaction {
            item_id: Some(args.t_item_id),
            action_type: direction.action_type(),
            amount: signed,
            user_email: args.t_user_email.clone(),
            note: args.t_note.clone(),
        },
    )
    .await?;

    conn.execute(
        "UPDATE items SET quantity = ?1 WHERE id = ?2",
        libsql::params![next, args.t_item_id],
    )
    .await?;
    Ok(next)
}
