//! Snapshot refresh endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/v1/refresh — re-fetch the snapshot from the dashboard
/// provider. A read of the external source, not a dashboard mutation.
pub async fn refresh(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let records = state
        .refresh()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    tracing::info!(records, provider = state.provider.name(), "snapshot refreshed");
    Ok(Json(json!({ "records": records })))
}
