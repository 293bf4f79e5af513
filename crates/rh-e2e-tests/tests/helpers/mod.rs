//! Shared test harness for E2E integration tests.
//!
//! Wires the advisor's real router to a mock dashboard provider,
//! exercising the full extraction → resolution → suggestion chain
//! across crate boundaries.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rh_advisor::mock::MockDashboardProvider;
use rh_advisor::routes::build_router;
use rh_advisor::state::AppState;
use rh_protocol::{FleetSnapshot, LocoRecord};
use rh_resolve::ResolverOptions;

/// E2E harness: advisor state + router over a mock provider.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness pre-loaded with the sample fleet (snapshot fresh).
    pub fn with_sample_fleet() -> Self {
        let state = AppState::with_sample_fleet();
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Harness serving the given records, with one refresh completed.
    pub async fn with_records(records: Vec<LocoRecord>) -> Self {
        let provider = Arc::new(MockDashboardProvider::new(FleetSnapshot::from_records(
            records,
        )));
        let state = AppState::new(provider, ResolverOptions::default(), Duration::seconds(300));
        state.refresh().await.expect("mock refresh");
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Harness whose provider fails and whose snapshot was never
    /// fetched — resolution sees a stale, empty snapshot.
    pub fn never_fetched() -> Self {
        let provider = Arc::new(MockDashboardProvider::failing());
        let state = AppState::new(provider, ResolverOptions::default(), Duration::seconds(300));
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::get(path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    /// Ask the suggest endpoint one question.
    pub async fn suggest(&self, text: &str) -> (StatusCode, serde_json::Value) {
        self.post_json("/api/v1/suggest", serde_json::json!({ "text": text }))
            .await
    }
}

/// Build a minimal locomotive record for scenario setups.
pub fn record(asset_id: &str, loco_no: &str, name: &str) -> LocoRecord {
    serde_json::from_value(serde_json::json!({
        "id": asset_id,
        "name": name,
        "locoNo": loco_no,
    }))
    .unwrap()
}
