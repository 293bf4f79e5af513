//! Dashboard data provider — the external read-only snapshot source.
//!
//! The advisor only ever reads: `getDashBoardData` is the one backend
//! function called here. Mutating siblings exist in the catalog so they
//! can be recognised, but nothing in this crate invokes them.

use std::collections::HashMap;

use async_trait::async_trait;
use rh_protocol::{FleetSnapshot, LocoRecord};
use thiserror::Error;

/// Errors from fetching dashboard data.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("dashboard request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dashboard returned malformed data: {0}")]
    Decode(String),
}

/// Read-only access to the dashboard backend.
///
/// Enables mocking for tests and swappable backends, mirroring the
/// snapshot-accessor seam the advisor consumes.
#[async_trait]
pub trait DashboardProvider: Send + Sync {
    /// Fetch the current dashboard dataset (`getDashBoardData`).
    async fn get_dashboard_data(&self) -> Result<FleetSnapshot, ProviderError>;

    /// Provider name (for logging/audit).
    fn name(&self) -> &str;
}

/// Fetches dashboard data over HTTP from the backend service.
pub struct HttpDashboardProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DashboardProvider for HttpDashboardProvider {
    async fn get_dashboard_data(&self) -> Result<FleetSnapshot, ProviderError> {
        let url = format!("{}/api/dashboard-data", self.base_url);
        let payload: serde_json::Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let records: HashMap<String, LocoRecord> =
            serde_json::from_value(payload).map_err(|e| ProviderError::Decode(e.to_string()))?;
        // Re-key from the records themselves in case the payload keys drift.
        Ok(FleetSnapshot::from_records(records.into_values()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = HttpDashboardProvider::new("http://dash.example.com/");
        assert_eq!(provider.base_url, "http://dash.example.com");
    }
}
