//! Snapshot refresh and fleet summary through the HTTP router.

mod helpers;

use axum::http::StatusCode;
use helpers::TestHarness;

#[tokio::test]
async fn refresh_then_fleet_summary() {
    let harness = TestHarness::with_sample_fleet();

    let (status, json) = harness.post_json("/api/v1/refresh", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["records"], 3);

    let (status, json) = harness.get("/api/v1/fleet").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
    let text = json.to_string();
    assert!(text.contains("4430 SD70M"));
    assert!(!text.contains("5f8a1c2b3d4e5f6a7b8c9d0e"));
}

#[tokio::test]
async fn failed_refresh_returns_bad_gateway() {
    let harness = TestHarness::never_fetched();

    let (status, json) = harness.post_json("/api/v1/refresh", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["status"], 502);
}

#[tokio::test]
async fn refresh_turns_stale_misses_into_final_answers() {
    let harness = TestHarness::with_sample_fleet();

    // Freshly refreshed: a miss is final, not a refresh suggestion.
    harness.post_json("/api/v1/refresh", serde_json::json!({})).await;
    let (_, json) = harness.suggest("when is loco 9999 due?").await;
    assert_eq!(json["outcome"]["reason"], "not_found_fresh");
}

#[tokio::test]
async fn health_is_up() {
    let harness = TestHarness::never_fetched();
    let (status, json) = harness.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
