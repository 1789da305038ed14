use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Runtime configuration, read from the environment.
///
/// - `NEXORA_BIND` — listen address (default `0.0.0.0:8000`)
/// - `NEXORA_SEED` — path to a JSON seed file for the in-memory store
/// - `NEXORA_STORE_TIMEOUT_MS` — per-query store timeout (default 5000)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub seed_path: Option<PathBuf>,
    pub store_timeout: Duration,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let bind = env_trimmed("NEXORA_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let seed_path = env_trimmed("NEXORA_SEED").map(PathBuf::from);
        let store_timeout = env_trimmed("NEXORA_STORE_TIMEOUT_MS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(
                Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
                Duration::from_millis,
            );
        Self {
            bind,
            seed_path,
            store_timeout,
        }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
