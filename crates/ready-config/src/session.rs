//! Session configuration: who is acting.
//!
//! Sign-in happens outside ReadyStock; the CLI only consumes a token the
//! backend's identity service already issued.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Access token (JWT) issued by the backend's identity service.
    #[serde(default)]
    pub access_token: String,

    /// Email attributed on transactions when the token carries none.
    #[serde(default)]
    pub user_email: String,
}

impl SessionConfig {
    pub fn has_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn user_email(&self) -> Option<&str> {
        if self.user_email.is_empty() {
            None
        } else {
            Some(&self.user_email)
        }
    }
}
