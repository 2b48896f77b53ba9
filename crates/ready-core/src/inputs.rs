//! Write-side inputs: new rows, the user-facing item update builder, and the
//! column-level patch backends apply.
//!
//! `NewItem`, `ItemPatch`, and `NewTransaction` serialize directly as the
//! insert/update bodies of the hosted backend, so `None` fields are skipped.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActionType;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// NewItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
}

impl NewItem {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i64, min_quantity: i64) -> Self {
        Self {
            name: name.into(),
            category: None,
            quantity,
            min_quantity,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name or negative counts.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_non_negative("quantity", self.quantity)?;
        validate_non_negative("min_quantity", self.min_quantity)
    }
}

// ---------------------------------------------------------------------------
// ItemUpdate
// ---------------------------------------------------------------------------

/// A partial edit of an item's user-editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,
}

impl ItemUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.min_quantity.is_none()
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name or negative counts.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(quantity) = self.quantity {
            validate_non_negative("quantity", quantity)?;
        }
        if let Some(min_quantity) = self.min_quantity {
            validate_non_negative("min_quantity", min_quantity)?;
        }
        Ok(())
    }
}

pub struct ItemUpdateBuilder(ItemUpdate);

impl Default for ItemUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ItemUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Option<String>) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn quantity(mut self, quantity: i64) -> Self {
        self.0.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub const fn min_quantity(mut self, min_quantity: i64) -> Self {
        self.0.min_quantity = Some(min_quantity);
        self
    }

    #[must_use]
    pub fn build(self) -> ItemUpdate {
        self.0
    }
}

// ---------------------------------------------------------------------------
// ItemPatch
// ---------------------------------------------------------------------------

/// Column-level update of an `items` row, including soft-delete columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl ItemPatch {
    #[must_use]
    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    /// Zero the quantity and flag the row deleted.
    #[must_use]
    pub fn soft_delete(at: DateTime<Utc>) -> Self {
        Self {
            quantity: Some(0),
            is_deleted: Some(true),
            deleted_at: Some(Some(at)),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.min_quantity.is_none()
            && self.is_deleted.is_none()
            && self.deleted_at.is_none()
    }
}

impl From<&ItemUpdate> for ItemPatch {
    fn from(update: &ItemUpdate) -> Self {
        Self {
            name: update.name.clone(),
            category: update.category.clone(),
            quantity: update.quantity,
            min_quantity: update.min_quantity,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// NewTransaction
// ---------------------------------------------------------------------------

/// Insert body for the `transactions` log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    pub item_id: Option<i64>,
    pub action_type: ActionType,
    pub amount: i64,
    pub user_email: Option<String>,
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("item name must not be empty".into()));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: i64) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}
