use serde::{Deserialize, Serialize};

use crate::loco::LocoRecord;

/// A same-priority match presented to the user for disambiguation.
///
/// The assetId is carried only as an internal join key for the eventual
/// recommended call; user-facing text comes from `label()` and never
/// includes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub asset_id: String,
    pub name: String,
    pub loco_no: String,
}

impl Candidate {
    pub fn from_record(record: &LocoRecord) -> Self {
        Self {
            asset_id: record.asset_id.clone(),
            name: record.name.clone(),
            loco_no: record.trimmed_loco_no().to_string(),
        }
    }

    /// User-facing label: `name (loco <locoNo>)`.
    pub fn label(&self) -> String {
        format!("{} (loco {})", self.name, self.loco_no)
    }
}

/// Why resolution needs another turn with the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowupReason {
    /// The extraction produced no candidates at all.
    NoCandidates,
    /// Nothing matched and the snapshot may be out of date.
    NotFoundStale,
    /// Nothing matched against known-fresh data.
    NotFoundFresh,
}

/// Outcome of grounding one extraction against the snapshot.
///
/// Computed per request, never persisted. The resolver never fabricates
/// a match and never tie-breaks among equally valid ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Exactly one locomotive matched.
    Resolved { record: LocoRecord },
    /// Multiple distinct identifiers each resolved uniquely.
    ResolvedMultiple { records: Vec<LocoRecord> },
    /// One identifier matched several records at the same priority rule.
    Ambiguous { candidates: Vec<Candidate> },
    /// Nothing matched; the caller should ask a follow-up question.
    NeedsFollowup { reason: FollowupReason },
}

impl ResolutionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. } | Self::ResolvedMultiple { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(asset_id: &str, loco_no: &str, name: &str) -> LocoRecord {
        serde_json::from_value(serde_json::json!({
            "id": asset_id,
            "name": name,
            "locoNo": loco_no,
        }))
        .unwrap()
    }

    #[test]
    fn candidate_label_hides_asset_id() {
        let candidate = Candidate::from_record(&record("5f8a1c2b3d4e5f6a7b8c9d0e", "903 ", "903 GP38-2"));
        assert_eq!(candidate.label(), "903 GP38-2 (loco 903)");
        assert!(!candidate.label().contains("5f8a"));
    }

    #[test]
    fn outcome_tagged_serialization() {
        let outcome = ResolutionOutcome::NeedsFollowup {
            reason: FollowupReason::NotFoundStale,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""kind":"needs_followup""#));
        assert!(json.contains(r#""reason":"not_found_stale""#));
    }

    #[test]
    fn resolved_outcomes() {
        let outcome = ResolutionOutcome::Resolved {
            record: record("5f8a1c2b3d4e5f6a7b8c9d0e", "4430", "4430 SD70M"),
        };
        assert!(outcome.is_resolved());
        let outcome = ResolutionOutcome::Ambiguous { candidates: vec![] };
        assert!(!outcome.is_resolved());
    }
}
