use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// A user's profile row. Read-only from the client's side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    /// `null` in the table means the role was never assigned.
    pub role: Option<UserRole>,
}
