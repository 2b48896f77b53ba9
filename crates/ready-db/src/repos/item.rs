//! Item repository: insert, lookup, active listing, column patches.

use chrono::Utc;

use ready_core::entities::Item;
use ready_core::inputs::{ItemPatch, NewItem};

use crate::StockDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_flag, get_opt_string, parse_datetime, parse_optional_datetime};

pub(crate) const SELECT_COLS: &str =
    "id, name, category, quantity, min_quantity, is_deleted, deleted_at, created_at";

pub(crate) fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        category: get_opt_string(row, 2)?,
        quantity: row.get(3)?,
        min_quantity: row.get(4)?,
        is_deleted: get_flag(row, 5)?,
        deleted_at: parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl StockDb {
    pub async fn insert_item(&self, item: &NewItem) -> Result<Item, DatabaseError> {
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO items (name, category, quantity, min_quantity, is_deleted, created_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5)",
                libsql::params![
                    item.name.as_str(),
                    item.category.as_deref(),
                    item.quantity,
                    item.min_quantity,
                    format_datetime(&now)
                ],
            )
            .await?;

        let id = self.conn().last_insert_rowid();
        tracing::debug!(id, name = %item.name, "inserted item");
        self.get_item(id).await
    }

    pub async fn get_item(&self, id: i64) -> Result<Item, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM items WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "item",
            id: id.to_string(),
        })?;
        row_to_item(&row)
    }

    /// Active (not soft-deleted) items ordered by name.
    pub async fn list_active_items(&self) -> Result<Vec<Item>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM items WHERE is_deleted = 0 ORDER BY name ASC, id ASC"
                ),
                (),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    /// Apply a column patch. An empty patch returns the row unchanged.
    pub async fn patch_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = patch.name {
            params.push(name.clone().into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(ref category) = patch.category {
            params.push(category.clone().map_or(libsql::Value::Null, Into::into));
            sets.push(format!("category = ?{}", params.len()));
        }
        if let Some(quantity) = patch.quantity {
            params.push(quantity.into());
            sets.push(format!("quantity = ?{}", params.len()));
        }
        if let Some(min_quantity) = patch.min_quantity {
            params.push(min_quantity.into());
            sets.push(format!("min_quantity = ?{}", params.len()));
        }
        if let Some(is_deleted) = patch.is_deleted {
            params.push(i64::from(is_deleted).into());
            sets.push(format!("is_deleted = ?{}", params.len()));
        }
        if let Some(ref deleted_at) = patch.deleted_at {
            params.push(
                deleted_at
                    .as_ref()
                    .map_or(libsql::Value::Null, |dt| format_datetime(dt).into()),
            );
            sets.push(format!("deleted_at = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_item(id).await;
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE items SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "item",
                id: id.to_string(),
            });
        }

        self.get_item(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn insert_item_roundtrip() {
        let db = test_db().await;
        let item = db
            .insert_item(&NewItem::new("Safety gloves", 12, 4).with_category("PPE"))
            .await
            .unwrap();

        assert!(item.id > 0);
        assert_eq!(item.name, "Safety gloves");
        assert_eq!(item.category.as_deref(), Some("PPE"));
        assert_eq!(item.quantity, 12);
        assert!(!item.is_deleted);

        let fetched = db.get_item(item.id).await.unwrap();
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn get_missing_item_is_not_found() {
        let db = test_db().await;
        let result = db.get_item(404).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { entity: "item", .. })));
    }

    #[tokio::test]
    async fn list_excludes_deleted_and_sorts_by_name() {
        let db = test_db().await;
        let zip = db.insert_item(&NewItem::new("Zip ties", 1, 0)).await.unwrap();
        db.insert_item(&NewItem::new("Anchors", 1, 0)).await.unwrap();
        let gone = db.insert_item(&NewItem::new("Mallet", 1, 0)).await.unwrap();
        db.patch_item(gone.id, &ItemPatch::soft_delete(Utc::now()))
            .await
            .unwrap();

        let names: Vec<String> = db
            .list_active_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Anchors".to_string(), zip.name]);
    }

    #[tokio::test]
    async fn patch_updates_only_given_columns() {
        let db = test_db().await;
        let item = db
            .insert_item(&NewItem::new("Drill bit", 8, 2).with_category("Tools"))
            .await
            .unwrap();

        let patched = db
            .patch_item(
                item.id,
                &ItemPatch {
                    category: Some(None),
                    min_quantity: Some(3),
                    ..ItemPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.name, "Drill bit");
        assert_eq!(patched.category, None);
        assert_eq!(patched.quantity, 8);
        assert_eq!(patched.min_quantity, 3);
    }

    #[tokio::test]
    async fn soft_delete_patch_sets_flag_and_timestamp() {
        let db = test_db().await;
        let item = db.insert_item(&NewItem::new("Bolts", 30, 5)).await.unwrap();
        let deleted = db
            .patch_item(item.id, &ItemPatch::soft_delete(Utc::now()))
            .await
            .unwrap();
        assert!(deleted.is_deleted);
        assert!(deleted.deleted_at.is_some());
        assert_eq!(deleted.quantity, 0);
    }

    #[tokio::test]
    async fn patch_missing_item_is_not_found() {
        let db = test_db().await;
        let result = db.patch_item(99, &ItemPatch::quantity(1)).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn empty_patch_returns_current_row() {
        let db = test_db().await;
        let item = db.insert_item(&NewItem::new("Nails", 2, 1)).await.unwrap();
        let same = db.patch_item(item.id, &ItemPatch::default()).await.unwrap();
        assert_eq!(same, item);
    }
}
