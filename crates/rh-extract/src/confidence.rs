//! Confidence grading — a pure function of the three candidate lists.

use rh_protocol::Confidence;

use crate::text::is_loco_number_shaped;

/// Grade an extraction: any asset ID is high trust; a loco number is
/// medium; a name led by a 3–5 digit number is medium; anything else,
/// including an empty extraction, is low.
pub fn grade(asset_ids: &[String], loco_nos: &[String], names: &[String]) -> Confidence {
    if !asset_ids.is_empty() {
        return Confidence::High;
    }
    if !loco_nos.is_empty() {
        return Confidence::Medium;
    }
    if names.iter().any(|n| has_number_prefix(n)) {
        return Confidence::Medium;
    }
    Confidence::Low
}

fn has_number_prefix(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .is_some_and(is_loco_number_shaped)
}
