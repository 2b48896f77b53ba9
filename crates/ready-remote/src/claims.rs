use base64::Engine as _;
use chrono::{DateTime, Utc};
use ready_core::enums::UserRole;
use serde::Deserialize;

use crate::error::RemoteError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoleMetadata {
    pub role: Option<String>,
}

/// Claims read from the session access token.
///
/// Decoded without signature verification; the backend verifies the token on
/// every request. Only used to attribute and label the acting user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    /// User id (`sub` claim).
    pub sub: Option<String>,
    pub email: Option<String>,
    pub exp: Option<i64>,
    #[serde(default)]
    pub app_metadata: RoleMetadata,
    #[serde(default)]
    pub user_metadata: RoleMetadata,
}

impl SessionClaims {
    /// Decode the payload segment of a JWT.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Claims` if the token is not three dot-separated
    /// segments or the payload is not base64url-encoded JSON.
    pub fn decode(jwt: &str) -> Result<Self, RemoteError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(RemoteError::Claims("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| RemoteError::Claims(format!("base64 decode failed: {e}")))?;
        serde_json::from_slice(&payload)
            .map_err(|e| RemoteError::Claims(format!("JSON parse failed: {e}")))
    }

    /// Role claim: `app_metadata.role`, then `user_metadata.role`.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.app_metadata
            .role
            .as_deref()
            .and_then(UserRole::from_claim)
            .or_else(|| {
                self.user_metadata
                    .role
                    .as_deref()
                    .and_then(UserRole::from_claim)
            })
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|at| at <= Utc::now())
    }
}
