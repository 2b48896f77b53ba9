use std::path::Path;

use anyhow::Context;
use ready_config::{BackendKind, ReadyConfig};
use ready_core::identity::Actor;
use ready_db::StockDb;
use ready_remote::RestBackend;
use ready_service::StockService;

use super::AnyBackend;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: StockService<AnyBackend>,
    pub config: ReadyConfig,
}

impl AppContext {
    /// Open the configured backend and resolve the acting user.
    pub async fn init(config: ReadyConfig) -> anyhow::Result<Self> {
        config
            .backend
            .validate()
            .context("invalid backend configuration")?;

        let (backend, actor) = match config.backend.kind {
            BackendKind::Local => open_local(&config).await?,
            BackendKind::Remote => open_remote(&config).await?,
        };

        tracing::debug!(
            backend = ?backend.kind(),
            email = actor.email.as_deref().unwrap_or("-"),
            role = actor.role.as_str(),
            "backend ready"
        );

        let service =
            StockService::new(backend, actor).with_recent_limit(config.general.recent_limit);
        Ok(Self { service, config })
    }
}

async fn open_local(config: &ReadyConfig) -> anyhow::Result<(AnyBackend, Actor)> {
    let path = config.backend.local_path.as_str();
    if let Some(parent) = parent_dir_to_create(path) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let db = StockDb::open_local(path)
        .await
        .with_context(|| format!("failed to open local database at {path}"))?;

    let actor = config
        .session
        .user_email()
        .map_or_else(Actor::default, Actor::with_email);
    Ok((AnyBackend::Local(db), actor))
}

/// Directory that must exist before a file database at `path` can open.
fn parent_dir_to_create(path: &str) -> Option<&Path> {
    if path == ":memory:" {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

async fn open_remote(config: &ReadyConfig) -> anyhow::Result<(AnyBackend, Actor)> {
    let rest = RestBackend::from_config(&config.backend, &config.session)
        .context("failed to build remote backend client")?;

    if !config.session.has_token() {
        tracing::warn!("no session.access_token set; requests use the anon key only");
    }

    let actor = rest
        .resolve_actor(config.session.user_email())
        .await
        .context("failed to resolve acting user")?;
    Ok((AnyBackend::Remote(rest), actor))
}
