use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Profile;
use crate::enums::UserRole;

/// The acting user, attributed on every transaction row it writes.
///
/// Produced by the backend adapters from session claims or the `profiles`
/// table. Contains only data, no auth logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Actor {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
}

impl Actor {
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Resolve the role: profile row first, then the session claim, then staff.
    #[must_use]
    pub fn resolve(
        user_id: Option<String>,
        email: Option<String>,
        claim_role: Option<UserRole>,
        profile: Option<&Profile>,
    ) -> Self {
        let role = profile
            .and_then(|p| p.role)
            .or(claim_role)
            .unwrap_or_default();
        let email = email.or_else(|| profile.and_then(|p| p.email.clone()));
        Self {
            user_id,
            email,
            role,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
