//! Advisor server configuration.

use serde::Deserialize;

/// Top-level advisor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the external dashboard backend.
    #[serde(default = "default_dashboard_url")]
    pub dashboard_url: String,
    /// Seconds before the cached snapshot counts as stale.
    #[serde(default = "default_snapshot_max_age_secs")]
    pub snapshot_max_age_secs: u64,
    /// Match loco numbers ignoring leading zeros when the exact pass
    /// finds nothing (ROUNDHOUSE_NUMERIC_LOCO_FALLBACK env var).
    #[serde(default)]
    pub numeric_loco_fallback: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dashboard_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_snapshot_max_age_secs() -> u64 {
    300
}

impl AdvisorConfig {
    /// Load config from ROUNDHOUSE_* environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("ROUNDHOUSE_HOST") {
            config.host = v;
        }
        if let Ok(v) = std::env::var("ROUNDHOUSE_PORT")
            && let Ok(port) = v.parse()
        {
            config.port = port;
        }
        if let Ok(v) = std::env::var("ROUNDHOUSE_DASHBOARD_URL") {
            config.dashboard_url = v;
        }
        if let Ok(v) = std::env::var("ROUNDHOUSE_SNAPSHOT_MAX_AGE_SECS")
            && let Ok(secs) = v.parse()
        {
            config.snapshot_max_age_secs = secs;
        }
        if let Ok(v) = std::env::var("ROUNDHOUSE_NUMERIC_LOCO_FALLBACK") {
            config.numeric_loco_fallback = v.eq_ignore_ascii_case("true") || v == "1";
        }
        config
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dashboard_url: default_dashboard_url(),
            snapshot_max_age_secs: default_snapshot_max_age_secs(),
            numeric_loco_fallback: false,
        }
    }
}
