use std::path::{Path, PathBuf};

use anyhow::Context;
use ready_config::ReadyConfig;

/// Load `.env` (if any) and then the layered configuration.
pub fn load_config() -> anyhow::Result<ReadyConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    if let Some(env_path) = find_dotenv(&cwd) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }

    ReadyConfig::load().context("failed to load readystock configuration")
}

/// The `.env` next to the working directory, or else the one at the nearest
/// ancestor holding a `.readystock/` directory.
fn find_dotenv(start: &Path) -> Option<PathBuf> {
    let local = start.join(".env");
    if local.is_file() {
        return Some(local);
    }

    start
        .ancestors()
        .skip(1)
        .find(|dir| dir.join(".readystock").is_dir())
        .map(|root| root.join(".env"))
        .filter(|path| path.is_file())
}
