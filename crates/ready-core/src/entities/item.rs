use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stock-keeping unit with a quantity and a reorder threshold.
///
/// Items are soft-deleted: `is_deleted` is set and the quantity zeroed, the
/// row itself stays so history keeps its item name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// At or below the reorder threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    #[must_use]
    pub const fn can_supply(&self, amount: i64) -> bool {
        self.quantity >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, min_quantity: i64) -> Item {
        Item {
            id: 1,
            name: "Round head screw".into(),
            category: Some("Hardware".into()),
            quantity,
            min_quantity,
            is_deleted: false,
            deleted_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn low_stock_includes_threshold() {
        assert!(item(5, 5).is_low_stock());
        assert!(item(0, 5).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }

    #[test]
    fn can_supply_exact_quantity() {
        assert!(item(3, 0).can_supply(3));
        assert!(!item(3, 0).can_supply(4));
    }

    #[test]
    fn deserializes_backend_row_without_soft_delete_columns() {
        let row = serde_json::json!({
            "id": 9,
            "name": "Cable tie",
            "category": null,
            "quantity": 40,
            "min_quantity": 10,
            "created_at": "2026-01-05T08:30:00+00:00"
        });
        let parsed: Item = serde_json::from_value(row).unwrap();
        assert_eq!(parsed.id, 9);
        assert!(!parsed.is_deleted);
        assert!(parsed.deleted_at.is_none());
    }
}
