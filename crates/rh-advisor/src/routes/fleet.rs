//! Fleet summary endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /api/v1/fleet — summary of the current snapshot. Names and loco
/// numbers only; assetIds stay internal.
pub async fn fleet_summary(State(state): State<AppState>) -> Json<Value> {
    let (snapshot, _) = state.current().await;
    let mut locos: Vec<Value> = snapshot
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "locoNo": r.trimmed_loco_no(),
                "inService": r.asset_states.in_service,
            })
        })
        .collect();
    locos.sort_by_key(|l| l["locoNo"].as_str().unwrap_or_default().to_string());

    Json(json!({
        "count": locos.len(),
        "locos": locos,
    }))
}
