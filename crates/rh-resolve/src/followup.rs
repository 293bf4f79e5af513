//! User-facing prompts for ambiguous and not-found outcomes.
//!
//! Candidate labels show name and loco number only; the assetId stays
//! internal.

use rh_protocol::{FollowupReason, ResolutionOutcome};

/// Render the follow-up prompt for an outcome, if it needs one.
/// Resolved outcomes return `None`.
pub fn prompt_for(outcome: &ResolutionOutcome) -> Option<String> {
    match outcome {
        ResolutionOutcome::Resolved { .. } | ResolutionOutcome::ResolvedMultiple { .. } => None,
        ResolutionOutcome::Ambiguous { candidates } => {
            let list: Vec<String> = candidates.iter().map(|c| c.label()).collect();
            Some(format!(
                "I found {} locomotives matching that. Which one did you mean? {}",
                candidates.len(),
                list.join("; ")
            ))
        }
        ResolutionOutcome::NeedsFollowup { reason } => Some(
            match reason {
                FollowupReason::NoCandidates => {
                    "I couldn't spot a locomotive reference in that question. \
                     Give me a loco number or name to look up."
                }
                FollowupReason::NotFoundStale => {
                    "No match in the current dashboard snapshot, and it may be out of date. \
                     Refresh the dashboard data and ask again."
                }
                FollowupReason::NotFoundFresh => {
                    "That locomotive isn't in the dashboard data. \
                     Double-check the loco number or name."
                }
            }
            .to_string(),
        ),
    }
}
