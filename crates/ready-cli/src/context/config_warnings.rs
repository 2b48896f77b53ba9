use ready_config::{BackendKind, ReadyConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ReadyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ReadyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.backend.is_remote_configured() && has_env_prefix(&env_keys, "READYSTOCK_BACKEND_") {
        warnings.push(
            "Backend config appears default while READYSTOCK_BACKEND_* env vars exist. Use double underscores (example: READYSTOCK_BACKEND__URL)."
                .to_string(),
        );
    }

    if !config.session.has_token() && has_env_prefix(&env_keys, "READYSTOCK_SESSION_") {
        warnings.push(
            "Session config appears default while READYSTOCK_SESSION_* env vars exist. Use double underscores (example: READYSTOCK_SESSION__ACCESS_TOKEN)."
                .to_string(),
        );
    }

    if config.backend.kind == BackendKind::Local && config.backend.is_remote_configured() {
        warnings.push(
            "backend.url and backend.anon_key are set but backend.kind is local; set READYSTOCK_BACKEND__KIND=remote to use them."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use ready_config::{BackendConfig, BackendKind, ReadyConfig, SessionConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = ReadyConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("READYSTOCK_BACKEND_URL".to_string(), "https://x.supabase.co".to_string()),
                ("READYSTOCK_SESSION_ACCESS_TOKEN".to_string(), "jwt".to_string()),
            ],
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_configured() {
        let config = ReadyConfig {
            backend: BackendConfig {
                kind: BackendKind::Remote,
                url: "https://x.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            session: SessionConfig {
                access_token: "jwt".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("READYSTOCK_BACKEND__URL".to_string(), "https://x.supabase.co".to_string())],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_when_remote_settings_are_ignored() {
        let config = ReadyConfig {
            backend: BackendConfig {
                url: "https://x.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(&config, Vec::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("backend.kind"));
    }
}
