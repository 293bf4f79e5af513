//! Suggestion endpoint.

use axum::Json;
use axum::extract::State;
use rh_protocol::Suggestion;
use serde::Deserialize;

use crate::state::AppState;
use crate::suggest::build_suggestion;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// The admin's free-text question.
    pub text: String,
}

/// POST /api/v1/suggest — advise on one admin question.
///
/// Always 200: empty or unparseable questions come back as a
/// low-confidence suggestion with a follow-up, not an error.
pub async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Json<Suggestion> {
    let (snapshot, context) = state.current().await;
    let suggestion = build_suggestion(&request.text, &snapshot, &context, &state.options);
    tracing::info!(
        id = %suggestion.id,
        confidence = %suggestion.extraction.confidence,
        resolved = suggestion.outcome.is_resolved(),
        recommended = suggestion.recommended.is_some(),
        "suggestion built"
    );
    Json(suggestion)
}
