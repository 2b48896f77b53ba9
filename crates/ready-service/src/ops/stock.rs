//! Receive / withdraw: atomic procedure first, client-side fallback second.

use ready_core::backend::{ProcedureArgs, StockBackend};
use ready_core::enums::StockDirection;
use ready_core::inputs::{ItemPatch, NewTransaction};
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::ServiceError;
use crate::service::StockService;

/// Which path applied a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockPath {
    /// The backend procedure ran; quantity and log changed atomically.
    Procedure,
    /// The client wrote the log row and the quantity as separate requests.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct StockOutcome {
    pub item_id: i64,
    pub direction: StockDirection,
    /// Positive amount moved.
    pub amount: i64,
    pub path: StockPath,
}

impl<B: StockBackend> StockService<B> {
    /// Add `amount` units to an item.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if `amount` is not positive.
    /// - `ServiceError::ItemNotFound` if the fallback cannot find the item.
    /// - `ServiceError::PartialWrite` if the fallback logged the movement but
    ///   could not update the quantity.
    pub async fn receive(
        &self,
        item_id: i64,
        amount: i64,
        note: Option<&str>,
    ) -> Result<StockOutcome, ServiceError> {
        self.move_stock(StockDirection::Receive, item_id, amount, note)
            .await
    }

    /// Remove `amount` units from an item.
    ///
    /// # Errors
    ///
    /// As [`Self::receive`], plus `ServiceError::InsufficientStock` when the
    /// item holds fewer than `amount` units. Nothing is written in that case.
    pub async fn withdraw(
        &self,
        item_id: i64,
        amount: i64,
        note: Option<&str>,
    ) -> Result<StockOutcome, ServiceError> {
        self.move_stock(StockDirection::Withdraw, item_id, amount, note)
            .await
    }

    async fn move_stock(
        &self,
        direction: StockDirection,
        item_id: i64,
        amount: i64,
        note: Option<&str>,
    ) -> Result<StockOutcome, ServiceError> {
        if amount <= 0 {
            return Err(ServiceError::Validation(format!(
                "amount must be positive (got {amount})"
            )));
        }

        let args = ProcedureArgs {
            t_item_id: item_id,
            t_amount: amount,
            t_note: note.filter(|n| !n.trim().is_empty()).map(str::to_string),
            t_user_email: self.actor_email(),
        };

        let path = match self
            .backend()
            .call_procedure(direction.procedure(), &args)
            .await
        {
            Ok(()) => StockPath::Procedure,
            Err(e) if direction == StockDirection::Withdraw && e.indicates_insufficient_stock() => {
                return Err(ServiceError::InsufficientStock {
                    item_id,
                    available: e.available_quantity(),
                    requested: amount,
                });
            }
            Err(e) => {
                tracing::warn!(
                    procedure = direction.procedure(),
                    item_id,
                    error = %e,
                    "stock procedure failed; applying client-side fallback"
                );
                self.apply_fallback(direction, &args).await?;
                StockPath::Fallback
            }
        };

        self.cache().invalidate_after_mutation();
        tracing::info!(item_id, %direction, amount, ?path, "stock movement recorded");
        Ok(StockOutcome {
            item_id,
            direction,
            amount,
            path,
        })
    }

    /// Read, check, write log, write item. Not atomic.
    async fn apply_fallback(
        &self,
        direction: StockDirection,
        args: &ProcedureArgs,
    ) -> Result<(), ServiceError> {
        let item_id = args.t_item_id;
        let item = self
            .backend()
            .fetch_item(item_id)
            .await
            .map_err(|e| ServiceError::from_item_lookup(item_id, e))?;
        if item.is_deleted {
            return Err(ServiceError::ItemNotFound(item_id));
        }

        if direction == StockDirection::Withdraw && !item.can_supply(args.t_amount) {
            return Err(ServiceError::InsufficientStock {
                item_id,
                available: Some(item.quantity),
                requested: args.t_amount,
            });
        }

        let signed = direction.signed(args.t_amount);
        let next = item.quantity.checked_add(signed).ok_or_else(|| {
            ServiceError::Validation(format!(
                "item {item_id} holds {} units and cannot take {signed} more",
                item.quantity
            ))
        })?;
        self.backend()
            .insert_transaction(&NewTransaction {
                item_id: Some(item_id),
                action_type: direction.action_type(),
                amount: signed,
                user_email: args.t_user_email.clone(),
                note: args.t_note.clone(),
            })
            .await?;

        if let Err(source) = self
            .backend()
            .update_item(item_id, &ItemPatch::quantity(next))
            .await
        {
            tracing::error!(
                item_id,
                logged_amount = signed,
                error = %source,
                "transaction logged but quantity update failed"
            );
            self.cache().invalidate_after_mutation();
            return Err(ServiceError::PartialWrite { item_id, source });
        }
        Ok(())
    }
}
