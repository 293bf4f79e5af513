//! Suggestion assembly — extraction + resolution + intent, gated by the
//! catalog so only read functions are ever recommended.

use chrono::Utc;
use rh_extract::extract_loco_query;
use rh_protocol::{FleetSnapshot, ReadIntent, ResolutionOutcome, SuggestedCall, Suggestion};
use rh_resolve::{ResolverContext, ResolverOptions, prompt_for, resolve};
use serde_json::json;
use uuid::Uuid;

use crate::intents::match_intent;

/// Build a suggestion for one admin question against a snapshot value.
///
/// Suggest-only: the result names a catalog call for the surrounding
/// application to run (or not); nothing here executes anything.
pub fn build_suggestion(
    input: &str,
    snapshot: &FleetSnapshot,
    context: &ResolverContext,
    options: &ResolverOptions,
) -> Suggestion {
    let extraction = extract_loco_query(input);
    let outcome = resolve(&extraction, snapshot, context, options);
    let intent = match_intent(input).map(|m| m.intent);

    let recommended = recommend(&outcome, intent);
    let followup = if recommended.is_some() {
        None
    } else {
        prompt_for(&outcome)
    };

    Suggestion {
        id: Uuid::now_v7(),
        input: input.to_string(),
        extraction,
        outcome,
        intent,
        recommended,
        followup,
        created_at: Utc::now(),
    }
}

fn recommend(outcome: &ResolutionOutcome, intent: Option<ReadIntent>) -> Option<SuggestedCall> {
    match outcome {
        ResolutionOutcome::Resolved { record } => {
            let intent = intent.unwrap_or(ReadIntent::AssetStatus);
            build_call(intent, json!({ "assetId": record.asset_id }))
        }
        ResolutionOutcome::ResolvedMultiple { records } => {
            let intent = intent.unwrap_or(ReadIntent::AssetStatus);
            let ids: Vec<&str> = records.iter().map(|r| r.asset_id.as_str()).collect();
            build_call(intent, json!({ "assetIds": ids }))
        }
        // Ties are the user's to break, not ours.
        ResolutionOutcome::Ambiguous { .. } => None,
        ResolutionOutcome::NeedsFollowup { reason } => {
            use rh_protocol::FollowupReason;
            // A fleet-scoped question legitimately extracts nothing;
            // a miss on a specific locomotive still needs the follow-up.
            let intent = intent?;
            if intent.requires_locomotive() || *reason != FollowupReason::NoCandidates {
                return None;
            }
            build_call(intent, json!({}))
        }
    }
}

/// Catalog gate: only read functions may be suggested.
fn build_call(intent: ReadIntent, args: serde_json::Value) -> Option<SuggestedCall> {
    let function = intent.function();
    if !function.is_read_only() {
        tracing::warn!(
            function = function.name(),
            "refusing to suggest a mutating function"
        );
        return None;
    }
    Some(SuggestedCall {
        function,
        args,
        display_fields: intent
            .display_fields()
            .iter()
            .map(|f| f.to_string())
            .collect(),
    })
}
