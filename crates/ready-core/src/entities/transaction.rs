use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActionType;

/// An append-only audit record of a stock quantity change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    /// `None` once the backend hard-deletes the item.
    pub item_id: Option<i64>,
    pub action_type: ActionType,
    /// Signed: positive adds stock, negative removes it.
    pub amount: i64,
    pub user_email: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A transaction joined with the name of its item, as shown in history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransactionWithItem {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub item_name: Option<String>,
}
