//! Action, role, and direction enums for ReadyStock.
//!
//! `ActionType` serializes in upper case because that is how the backend's
//! `transaction_type` column stores it. `UserRole` uses lower case to match
//! the `profiles.role` column and session claims.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// Kind of change recorded by a transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Create,
    Receive,
    Withdraw,
    Update,
    Delete,
}

impl ActionType {
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Receive,
        Self::Withdraw,
        Self::Update,
        Self::Delete,
    ];

    /// Return the string representation used in storage and filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Receive => "RECEIVE",
            Self::Withdraw => "WITHDRAW",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a stored or user-supplied value. Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the value names no action.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let upper = raw.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == upper)
            .ok_or_else(|| CoreError::Validation(format!("unknown action type '{raw}'")))
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Role of the acting user, issued by the backend's identity subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[default]
    Staff,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }

    /// Parse a role claim. Unknown values yield `None`.
    #[must_use]
    pub fn from_claim(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StockDirection
// ---------------------------------------------------------------------------

/// Direction of a stock movement through the receive/withdraw protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockDirection {
    Receive,
    Withdraw,
}

impl StockDirection {
    /// Name of the backend procedure performing this movement atomically.
    #[must_use]
    pub const fn procedure(self) -> &'static str {
        match self {
            Self::Receive => "receive_item",
            Self::Withdraw => "withdraw_item",
        }
    }

    #[must_use]
    pub const fn action_type(self) -> ActionType {
        match self {
            Self::Receive => ActionType::Receive,
            Self::Withdraw => ActionType::Withdraw,
        }
    }

    /// Signed amount as logged: positive for receive, negative for withdraw.
    #[must_use]
    pub const fn signed(self, amount: i64) -> i64 {
        match self {
            Self::Receive => amount,
            Self::Withdraw => -amount,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receive => "receive",
            Self::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("RECEIVE", ActionType::Receive)]
    #[case("withdraw", ActionType::Withdraw)]
    #[case(" Update ", ActionType::Update)]
    #[case("delete", ActionType::Delete)]
    #[case("Create", ActionType::Create)]
    fn action_type_parses_case_insensitively(#[case] raw: &str, #[case] expected: ActionType) {
        assert_eq!(ActionType::parse(raw).unwrap(), expected);
    }

    #[test]
    fn action_type_rejects_unknown() {
        let err = ActionType::parse("ADJUST").unwrap_err();
        assert!(err.to_string().contains("unknown action type 'ADJUST'"));
    }

    #[test]
    fn action_type_serializes_upper_case() {
        let json = serde_json::to_string(&ActionType::Withdraw).unwrap();
        assert_eq!(json, "\"WITHDRAW\"");
        let back: ActionType = serde_json::from_str("\"RECEIVE\"").unwrap();
        assert_eq!(back, ActionType::Receive);
    }

    #[test]
    fn role_claims_parse() {
        assert_eq!(UserRole::from_claim("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_claim("STAFF"), Some(UserRole::Staff));
        assert_eq!(UserRole::from_claim("owner"), None);
        assert_eq!(UserRole::default(), UserRole::Staff);
    }

    #[test]
    fn direction_signs_amount() {
        assert_eq!(StockDirection::Receive.signed(7), 7);
        assert_eq!(StockDirection::Withdraw.signed(7), -7);
        assert_eq!(StockDirection::Withdraw.procedure(), "withdraw_item");
        assert_eq!(StockDirection::Receive.action_type(), ActionType::Receive);
    }
}
