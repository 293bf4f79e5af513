use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{DashboardFunction, ReadIntent};
use crate::extraction::ExtractionResult;
use crate::resolution::ResolutionOutcome;

/// A catalog-validated read-only call the surrounding application may
/// choose to execute. Suggest-only: nothing in this crate runs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedCall {
    pub function: DashboardFunction,
    /// Arguments for the call. The assetId join key lives here and
    /// nowhere user-facing.
    #[serde(default)]
    pub args: serde_json::Value,
    /// Result fields the dashboard should display.
    pub display_fields: Vec<String>,
}

/// Envelope returned by the advisor for one admin question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique suggestion ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Original admin question.
    pub input: String,
    /// Entity extraction output.
    pub extraction: ExtractionResult,
    /// Snapshot grounding outcome.
    pub outcome: ResolutionOutcome,
    /// Matched intent, if the question mapped to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<ReadIntent>,
    /// Recommended read call, when resolution and intent allow one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<SuggestedCall>,
    /// Follow-up question for the admin, when no call can be recommended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup: Option<String>,
    /// When the suggestion was produced.
    pub created_at: DateTime<Utc>,
}
