//! Rule-based intent matching — keyword patterns over admin questions.
//!
//! Covers the common dashboard questions at zero cost and
//! sub-millisecond latency. Anything unmatched yields no intent; the
//! suggestion layer then falls back to the default detail view for a
//! resolved locomotive, or asks a follow-up.

use rh_protocol::ReadIntent;

/// A matched intent with a pattern-strength confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentMatch {
    pub intent: ReadIntent,
    pub confidence: f64,
}

/// Core pattern matching logic.
pub fn match_intent(text: &str) -> Option<IntentMatch> {
    let lower = text.to_lowercase();
    let lower = lower.trim();

    // ── Fleet-scoped questions ──────────────────────────────────

    // overdue_overview: must precede the due check ("overdue" contains "due").
    if matches_any(lower, &["overdue", "past due", "behind on inspection"]) {
        return Some(IntentMatch {
            intent: ReadIntent::OverdueOverview,
            confidence: 0.9,
        });
    }

    // fleet_overview: "fleet overview", "all locos", "the roster"
    if matches_any(
        lower,
        &["fleet", "all loco", "every loco", "roster", "overview"],
    ) {
        return Some(IntentMatch {
            intent: ReadIntent::FleetOverview,
            confidence: 0.85,
        });
    }

    // ── Locomotive-scoped questions ─────────────────────────────

    // out_of_use_credit: "out of use credit", "oou credit", "credit days"
    if matches_any(lower, &["out of use", "out-of-use", "credit"]) {
        return Some(IntentMatch {
            intent: ReadIntent::OutOfUseCredit,
            confidence: 0.9,
        });
    }

    // last_inspection: "last inspection", "when was X inspected"
    if matches_any(
        lower,
        &[
            "last inspection",
            "previous inspection",
            "most recent inspection",
            "last inspected",
            "inspection history",
            "when was",
        ],
    ) {
        return Some(IntentMatch {
            intent: ReadIntent::LastInspection,
            confidence: if lower.contains("inspect") { 0.9 } else { 0.75 },
        });
    }

    // due_inspection: "due", "next inspection", "expires"
    if matches_any(
        lower,
        &[
            "due",
            "next inspection",
            "upcoming inspection",
            "comes up",
            "expir",
        ],
    ) {
        return Some(IntentMatch {
            intent: ReadIntent::DueInspection,
            confidence: 0.9,
        });
    }

    // asset_status: "status of", "is X in service"
    if matches_any(
        lower,
        &["status", "state of", "in service", "condition", "stored"],
    ) {
        return Some(IntentMatch {
            intent: ReadIntent::AssetStatus,
            confidence: 0.85,
        });
    }

    None
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
