//! # System Configuration
//!
//! Defaults, optionally overridden from a config file (any serde format) or
//! from the environment:
//!
//! | Field | Env var | Default |
//! |-------|---------|---------|
//! | `name` | `ACTOR_SYSTEM_NAME` | `local` |
//! | `resolve_timeout_ms` | `ACTOR_RESOLVE_TIMEOUT_MS` | `5000` |

use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Name of the system, used in every rendered actor path.
    pub name: String,
    /// Timeout used by [`ActorSystem::resolve_one`](crate::lifecycle::ActorSystem::resolve_one).
    pub resolve_timeout_ms: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            name: "local".to_string(),
            resolve_timeout_ms: 5_000,
        }
    }
}

impl SystemConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `ACTOR_SYSTEM_NAME` and `ACTOR_RESOLVE_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = std::env::var("ACTOR_SYSTEM_NAME") {
            if name.is_empty() || name.contains('/') {
                warn!(%name, "Ignoring invalid ACTOR_SYSTEM_NAME");
            } else {
                config.name = name;
            }
        }
        if let Ok(value) = std::env::var("ACTOR_RESOLVE_TIMEOUT_MS") {
            match value.parse() {
                Ok(ms) => config.resolve_timeout_ms = ms,
                Err(e) => warn!(%value, error = %e, "Ignoring invalid ACTOR_RESOLVE_TIMEOUT_MS"),
            }
        }
        config
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}
