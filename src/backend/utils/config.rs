//! Application configuration.

use anyhow::Context;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const EMBEDDED_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/config/app.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API origin. Empty means same origin as the page.
    pub base_url: String,
    pub session_path: String,
    pub login_path: String,
    pub logout_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long a resolved session is served without asking the server again.
    pub stale_time_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            session_path: "/api/auth/me".to_string(),
            login_path: "/api/auth/login".to_string(),
            logout_path: "/api/auth/logout".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: 300,
        }
    }
}

impl SessionConfig {
    pub fn stale_time(&self) -> TimeDelta {
        i64::try_from(self.stale_time_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse application config")
    }

    /// Loads the configuration bundled with the build, falling back to
    /// defaults when it does not parse.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {e:#}");
                Self::default()
            }
        }
    }
}
