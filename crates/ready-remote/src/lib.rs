//! # ready-remote
//!
//! HTTP client for the hosted ReadyStock backend.
//!
//! The backend follows PostgREST conventions: tables under `/rest/v1/<table>`
//! with `column=op.value` filters, remote procedures under
//! `/rest/v1/rpc/<name>`, and exact counts reported through `Content-Range`.
//! Every request carries the project's `apikey` plus a bearer token (the
//! session access token when signed in, the anon key otherwise), and the
//! backend's row-level policies decide what the caller may do.

pub mod claims;
mod error;
mod http;
mod rows;
mod stock_backend;

pub use claims::SessionClaims;
pub use error::RemoteError;
pub use http::parse_content_range_total;

use std::time::Duration;

use ready_config::{BackendConfig, SessionConfig};
use ready_core::identity::Actor;

/// Client for one hosted backend project.
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl RestBackend {
    /// Create a client for `base_url` authenticated with `anon_key`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotConfigured` if the URL or key is empty, or
    /// `RemoteError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(
        base_url: &str,
        anon_key: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        if base_url.trim().is_empty() {
            return Err(RemoteError::NotConfigured("backend.url is empty".into()));
        }
        if anon_key.trim().is_empty() {
            return Err(RemoteError::NotConfigured("backend.anon_key is empty".into()));
        }
        let http = reqwest::Client::builder()
            .user_agent("readystock/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: access_token.filter(|t| !t.is_empty()),
        })
    }

    /// Build a client from the `[backend]` and `[session]` config sections.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(backend: &BackendConfig, session: &SessionConfig) -> Result<Self, RemoteError> {
        Self::new(
            &backend.url,
            &backend.anon_key,
            session.has_token().then(|| session.access_token.clone()),
            Duration::from_secs(backend.timeout_secs),
        )
    }

    /// Claims of the current session token, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Claims` if the token cannot be decoded.
    pub fn session_claims(&self) -> Result<Option<SessionClaims>, RemoteError> {
        self.access_token
            .as_deref()
            .map(SessionClaims::decode)
            .transpose()
    }

    /// Resolve the acting user from session claims and the `profiles` table.
    ///
    /// A profile lookup failure is logged and treated as "no profile".
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Claims` if the configured token cannot be decoded.
    pub async fn resolve_actor(&self, fallback_email: Option<&str>) -> Result<Actor, RemoteError> {
        let Some(claims) = self.session_claims()? else {
            return Ok(Actor {
                email: fallback_email.map(str::to_string),
                ..Actor::default()
            });
        };
        if claims.is_expired() {
            tracing::warn!(
                expires_at = ?claims.expires_at(),
                "session token has expired; the backend will reject authenticated requests"
            );
        }

        let profile = match claims.sub.as_deref() {
            Some(user_id) => match self.get_profile(user_id).await {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!(user_id, %e, "profile lookup failed; using session claims");
                    None
                }
            },
            None => None,
        };

        Ok(Actor::resolve(
            claims.sub.clone(),
            claims
                .email
                .clone()
                .or_else(|| fallback_email.map(str::to_string)),
            claims.role(),
            profile.as_ref(),
        ))
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{table}", self.base_url)
        } else {
            format!("{}/rest/v1/{table}?{query}", self.base_url)
        }
    }

    fn rpc_url(&self, name: &str) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.access_token.as_deref().unwrap_or(&self.anon_key);
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }
}
