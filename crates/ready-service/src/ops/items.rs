//! Item listing, creation, edits, and soft deletion with implicit logging.

use chrono::Utc;

use ready_core::backend::StockBackend;
use ready_core::entities::Item;
use ready_core::enums::ActionType;
use ready_core::inputs::{ItemPatch, ItemUpdate, NewItem, NewTransaction};

use crate::error::ServiceError;
use crate::service::StockService;

impl<B: StockBackend> StockService<B> {
    /// Active items ordered by name. Served from the cache when possible.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Backend` if the backend read fails.
    pub async fn list_items(&self) -> Result<Vec<Item>, ServiceError> {
        if let Some(items) = self.cache().items() {
            tracing::debug!(count = items.len(), "item list served from cache");
            return Ok(items);
        }
        let items = self.backend().list_items().await?;
        self.cache().store_items(&items);
        Ok(items)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::ItemNotFound` if no item has this id.
    pub async fn get_item(&self, id: i64) -> Result<Item, ServiceError> {
        self.backend()
            .fetch_item(id)
            .await
            .map_err(|e| ServiceError::from_item_lookup(id, e))
    }

    /// Active items at or below their reorder threshold.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Backend` if the backend read fails.
    pub async fn low_stock_items(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self
            .list_items()
            .await?
            .into_iter()
            .filter(Item::is_low_stock)
            .collect())
    }

    /// Create an item and log its opening quantity.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Core` if the input fails validation.
    /// - `ServiceError::PartialWrite` if the item was created but the CREATE
    ///   log row could not be written.
    pub async fn create_item(&self, new_item: &NewItem) -> Result<Item, ServiceError> {
        new_item.validate()?;
        let item = self.backend().insert_item(new_item).await?;
        self.cache().invalidate_after_mutation();

        self.log_item_change(
            item.id,
            ActionType::Create,
            item.quantity,
            format!("created with quantity {}", item.quantity),
        )
        .await?;

        tracing::info!(item_id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Edit an item. A quantity change is logged as one UPDATE row.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Core` / `ServiceError::Validation` for bad or empty
    ///   input, or when the item is deleted.
    /// - `ServiceError::ItemNotFound` if no item has this id.
    /// - `ServiceError::PartialWrite` if the item changed but the UPDATE log
    ///   row could not be written.
    pub async fn update_item(&self, id: i64, update: &ItemUpdate) -> Result<Item, ServiceError> {
        update.validate()?;
        if update.is_empty() {
            return Err(ServiceError::Validation("nothing to update".into()));
        }

        let current = self.get_item(id).await?;
        if current.is_deleted {
            return Err(ServiceError::Validation(format!(
                "item {id} is deleted and cannot be edited"
            )));
        }

        let updated = self
            .backend()
            .update_item(id, &ItemPatch::from(update))
            .await
            .map_err(|e| ServiceError::from_item_lookup(id, e))?;
        self.cache().invalidate_after_mutation();

        let delta = updated.quantity - current.quantity;
        if delta != 0 {
            self.log_item_change(
                id,
                ActionType::Update,
                delta,
                format!("quantity {} -> {}", current.quantity, updated.quantity),
            )
            .await?;
        }

        tracing::info!(item_id = id, delta, "item updated");
        Ok(updated)
    }

    /// Soft-delete an item: zero its quantity, flag it deleted, log the loss.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if the item is already deleted.
    /// - `ServiceError::ItemNotFound` if no item has this id.
    /// - `ServiceError::PartialWrite` if the item was deleted but the DELETE
    ///   log row could not be written.
    pub async fn delete_item(&self, id: i64) -> Result<Item, ServiceError> {
        let current = self.get_item(id).await?;
        if current.is_deleted {
            return Err(ServiceError::Validation(format!(
                "item {id} is already deleted"
            )));
        }

        let deleted = self
            .backend()
            .update_item(id, &ItemPatch::soft_delete(Utc::now()))
            .await
            .map_err(|e| ServiceError::from_item_lookup(id, e))?;
        self.cache().invalidate_after_mutation();

        self.log_item_change(
            id,
            ActionType::Delete,
            -current.quantity,
            format!("ลบสินค้า: {}", current.name),
        )
        .await?;

        tracing::info!(item_id = id, removed = current.quantity, "item deleted");
        Ok(deleted)
    }

    /// Append the log row for an item write that already happened.
    async fn log_item_change(
        &self,
        item_id: i64,
        action_type: ActionType,
        amount: i64,
        note: String,
    ) -> Result<(), ServiceError> {
        let entry = NewTransaction {
            item_id: Some(item_id),
            action_type,
            amount,
            user_email: self.actor_email(),
            note: Some(note),
        };
        if let Err(source) = self.backend().insert_transaction(&entry).await {
            tracing::error!(
                item_id,
                action = %action_type,
                error = %source,
                "item written but transaction log failed"
            );
            return Err(ServiceError::PartialWrite { item_id, source });
        }
        self.cache().invalidate_after_mutation();
        Ok(())
    }
}
