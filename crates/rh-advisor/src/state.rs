//! Shared application state for the Axum server.
//!
//! The snapshot is held behind `Arc<RwLock<…>>` and swapped atomically
//! on refresh; a resolution call clones the `Arc` and works on that one
//! immutable value for its whole duration.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rh_protocol::FleetSnapshot;
use rh_resolve::{ResolverContext, ResolverOptions};
use tokio::sync::RwLock;

use crate::config::AdvisorConfig;
use crate::mock::MockDashboardProvider;
use crate::provider::{DashboardProvider, HttpDashboardProvider, ProviderError};

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<RwLock<SnapshotHandle>>,
    /// External dashboard data source.
    pub provider: Arc<dyn DashboardProvider>,
    /// Resolution behavior toggles.
    pub options: ResolverOptions,
    /// Age past which the cached snapshot counts as stale.
    pub max_age: Duration,
}

#[derive(Clone, Default)]
struct SnapshotHandle {
    snapshot: Arc<FleetSnapshot>,
    fetched_at: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DashboardProvider>, options: ResolverOptions, max_age: Duration) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(SnapshotHandle::default())),
            provider,
            options,
            max_age,
        }
    }

    /// Build state from config with the HTTP provider.
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(
            Arc::new(HttpDashboardProvider::new(config.dashboard_url.clone())),
            ResolverOptions {
                numeric_loco_fallback: config.numeric_loco_fallback,
                ..Default::default()
            },
            Duration::seconds(config.snapshot_max_age_secs as i64),
        )
    }

    /// In-memory state pre-loaded with the sample fleet (for tests).
    pub fn with_sample_fleet() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(SnapshotHandle {
                snapshot: Arc::new(crate::mock::sample_fleet()),
                fetched_at: Some(Utc::now()),
            })),
            provider: Arc::new(MockDashboardProvider::with_sample_fleet()),
            options: ResolverOptions::default(),
            max_age: Duration::seconds(300),
        }
    }

    /// Re-fetch the snapshot from the provider and swap it in.
    /// Returns the record count.
    pub async fn refresh(&self) -> Result<usize, ProviderError> {
        let snapshot = self.provider.get_dashboard_data().await?;
        let count = snapshot.len();
        let mut guard = self.snapshot.write().await;
        *guard = SnapshotHandle {
            snapshot: Arc::new(snapshot),
            fetched_at: Some(Utc::now()),
        };
        Ok(count)
    }

    /// Current snapshot value plus the resolver context derived from its
    /// fetch time. A never-fetched snapshot reports as stale.
    pub async fn current(&self) -> (Arc<FleetSnapshot>, ResolverContext) {
        let guard = self.snapshot.read().await;
        let context = match guard.fetched_at {
            Some(ts) => ResolverContext::fetched_at(ts).with_max_age(self.max_age),
            None => ResolverContext::stale(),
        };
        (guard.snapshot.clone(), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn unfetched_state_reports_stale() {
        let state = AppState::new(
            Arc::new(MockDashboardProvider::with_sample_fleet()),
            ResolverOptions::default(),
            Duration::seconds(300),
        );
        let (snapshot, context) = state.current().await;
        assert!(snapshot.is_empty());
        assert!(!context.is_fresh(Utc::now()));
    }

    #[tokio::test]
    async fn refresh_swaps_in_fresh_snapshot() {
        let state = AppState::new(
            Arc::new(MockDashboardProvider::with_sample_fleet()),
            ResolverOptions::default(),
            Duration::seconds(300),
        );
        let count = state.refresh().await.unwrap();
        assert_eq!(count, 3);
        let (snapshot, context) = state.current().await;
        assert_eq!(snapshot.len(), 3);
        assert!(context.is_fresh(Utc::now()));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let state = AppState::with_sample_fleet();
        let failing = AppState {
            provider: Arc::new(MockDashboardProvider::failing()),
            ..state
        };
        assert!(failing.refresh().await.is_err());
        let (snapshot, _) = failing.current().await;
        assert_eq!(snapshot.len(), 3);
    }

    #[tokio::test]
    async fn sample_state_is_fresh() {
        let state = AppState::with_sample_fleet();
        let (snapshot, context) = state.current().await;
        assert_eq!(snapshot.len(), 3);
        assert!(context.is_fresh(Utc::now()));
    }
}
