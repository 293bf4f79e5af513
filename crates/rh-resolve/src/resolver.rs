//! Strict-priority resolution of extracted references against a snapshot.

use chrono::{DateTime, Utc};
use rh_protocol::{
    Candidate, ExtractionResult, FleetSnapshot, FollowupReason, LocoRecord, ResolutionOutcome,
};

use crate::context::ResolverContext;

/// Cap on candidates surfaced in an ambiguous outcome.
pub const MAX_CANDIDATES: usize = 5;

/// Fuzzy name matching is deliberately not implemented: a near-miss is
/// surfaced to the user instead of silently picking a top score. The
/// enum keeps the decision visible; a future variant forces every match
/// site below to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuzzyNames {
    #[default]
    Disabled,
}

/// Resolution behavior toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverOptions {
    /// Match loco numbers by numeric equality (ignoring leading zeros)
    /// when the exact trimmed pass finds nothing. Off by default to keep
    /// resolution auditable.
    pub numeric_loco_fallback: bool,
    pub fuzzy_names: FuzzyNames,
}

/// Ground an extraction against the snapshot.
pub fn resolve(
    extraction: &ExtractionResult,
    snapshot: &FleetSnapshot,
    context: &ResolverContext,
    options: &ResolverOptions,
) -> ResolutionOutcome {
    resolve_at(extraction, snapshot, context, options, Utc::now())
}

/// `resolve` with an explicit clock, for deterministic tests.
///
/// Rules apply in strict priority: assetId membership, then exact
/// trimmed loco number, then case-insensitive exact name. The first
/// rule with any hit decides the outcome; an identifier matching
/// several records at the same rule is ambiguous, never tie-broken.
pub fn resolve_at(
    extraction: &ExtractionResult,
    snapshot: &FleetSnapshot,
    context: &ResolverContext,
    options: &ResolverOptions,
    now: DateTime<Utc>,
) -> ResolutionOutcome {
    // Rule 1: assetId — direct key membership. Each ID matches at most
    // one record; an unmatched ID falls through rather than being
    // "found" by coincidence at a lower rule.
    let mut matched: Vec<&LocoRecord> = Vec::new();
    for asset_id in &extraction.asset_ids {
        if let Some(record) = snapshot.get(asset_id) {
            push_record(&mut matched, record);
        }
    }
    if !matched.is_empty() {
        tracing::debug!(rule = "asset_id", hits = matched.len(), "resolved");
        return aggregate(matched);
    }

    // Rule 2: loco number — exact match on trimmed values; numeric
    // fallback only when enabled and the exact pass found nothing.
    let mut matched: Vec<&LocoRecord> = Vec::new();
    for loco_no in &extraction.loco_nos {
        let wanted = loco_no.trim();
        let exact: Vec<&LocoRecord> = snapshot
            .iter()
            .filter(|r| r.trimmed_loco_no() == wanted)
            .collect();
        let hits = if exact.is_empty() && options.numeric_loco_fallback {
            numeric_matches(snapshot, wanted)
        } else {
            exact
        };
        match hits.len() {
            0 => {}
            1 => push_record(&mut matched, hits[0]),
            _ => return ambiguous(hits),
        }
    }
    if !matched.is_empty() {
        tracing::debug!(rule = "loco_no", hits = matched.len(), "resolved");
        return aggregate(matched);
    }

    // Rule 3: name — case-insensitive exact.
    let mut matched: Vec<&LocoRecord> = Vec::new();
    for name in &extraction.names {
        let hits: Vec<&LocoRecord> = snapshot
            .iter()
            .filter(|r| r.name.eq_ignore_ascii_case(name))
            .collect();
        match hits.len() {
            0 => {}
            1 => push_record(&mut matched, hits[0]),
            _ => return ambiguous(hits),
        }
    }
    if !matched.is_empty() {
        tracing::debug!(rule = "name", hits = matched.len(), "resolved");
        return aggregate(matched);
    }

    // Rule 4: fuzzy name matching stays a no-op.
    match options.fuzzy_names {
        FuzzyNames::Disabled => {}
    }

    let reason = if extraction.is_empty() {
        FollowupReason::NoCandidates
    } else if context.is_fresh(now) {
        FollowupReason::NotFoundFresh
    } else {
        FollowupReason::NotFoundStale
    };
    tracing::debug!(?reason, "no match");
    ResolutionOutcome::NeedsFollowup { reason }
}

fn push_record<'a>(matched: &mut Vec<&'a LocoRecord>, record: &'a LocoRecord) {
    if !matched.iter().any(|r| r.asset_id == record.asset_id) {
        matched.push(record);
    }
}

fn aggregate(matched: Vec<&LocoRecord>) -> ResolutionOutcome {
    if matched.len() == 1 {
        ResolutionOutcome::Resolved {
            record: matched[0].clone(),
        }
    } else {
        ResolutionOutcome::ResolvedMultiple {
            records: matched.into_iter().cloned().collect(),
        }
    }
}

fn ambiguous(hits: Vec<&LocoRecord>) -> ResolutionOutcome {
    let mut candidates: Vec<Candidate> = hits.iter().map(|r| Candidate::from_record(r)).collect();
    // Snapshot iteration order is arbitrary; sort for a stable list.
    candidates.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.loco_no.cmp(&b.loco_no))
            .then_with(|| a.asset_id.cmp(&b.asset_id))
    });
    candidates.truncate(MAX_CANDIDATES);
    ResolutionOutcome::Ambiguous { candidates }
}

fn numeric_matches<'a>(snapshot: &'a FleetSnapshot, wanted: &str) -> Vec<&'a LocoRecord> {
    let Ok(n) = wanted.parse::<u64>() else {
        return Vec::new();
    };
    snapshot
        .iter()
        .filter(|r| r.trimmed_loco_no().parse::<u64>().is_ok_and(|m| m == n))
        .collect()
}
