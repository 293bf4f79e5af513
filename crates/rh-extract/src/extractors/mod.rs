//! The three sub-extractors and the combined entry point.

pub(crate) mod asset_id;
pub(crate) mod loco_no;
pub(crate) mod name;

use rh_protocol::ExtractionResult;

use crate::confidence;

/// Extract locomotive-reference candidates from one admin question.
///
/// Pure and deterministic: same input, same result. Candidate lists are
/// de-duplicated in first-seen order; raw matches from all three
/// sub-extractors are merged and sorted by start offset.
pub fn extract_loco_query(input: &str) -> ExtractionResult {
    let (asset_ids, mut raw_matches) = asset_id::extract(input);
    let (loco_nos, no_matches) = loco_no::extract(input);
    let (names, name_matches) = name::extract(input);

    raw_matches.extend(no_matches);
    raw_matches.extend(name_matches);
    raw_matches.sort_by_key(|m| (m.start, m.end));

    let confidence = confidence::grade(&asset_ids, &loco_nos, &names);
    tracing::debug!(
        asset_ids = asset_ids.len(),
        loco_nos = loco_nos.len(),
        names = names.len(),
        %confidence,
        "extraction complete"
    );

    ExtractionResult {
        input: input.to_string(),
        asset_ids,
        loco_nos,
        names,
        raw_matches,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_protocol::Confidence;

    #[test]
    fn extraction_is_idempotent() {
        let input = "When is loco 4430 SD70M due? See 5f8a1c2b3d4e5f6a7b8c9d0e";
        let a = extract_loco_query(input);
        let b = extract_loco_query(input);
        assert_eq!(a.asset_ids, b.asset_ids);
        assert_eq!(a.loco_nos, b.loco_nos);
        assert_eq!(a.names, b.names);
        assert_eq!(a.raw_matches, b.raw_matches);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn candidate_lists_have_no_duplicates() {
        let result =
            extract_loco_query("loco 4430 and loco 4430 again, 4430SD70M or 4430SD70M due");
        for list in [&result.asset_ids, &result.loco_nos, &result.names] {
            let unique: std::collections::HashSet<&String> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn keyword_precedence_keeps_number_and_name() {
        let result = extract_loco_query("loco 4430 SD70M");
        assert_eq!(result.loco_nos, vec!["4430"]);
        assert!(result.names.contains(&"4430 SD70M".to_string()));
    }

    #[test]
    fn no_space_compound_splits_without_loco_no() {
        let result = extract_loco_query("Status for 4430SD70M");
        assert_eq!(result.names, vec!["4430 SD70M"]);
        assert!(result.loco_nos.is_empty());
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn year_rejection() {
        let result = extract_loco_query("Show inspections in 2024");
        assert!(result.loco_nos.is_empty());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn day_suffix_rejection() {
        let result = extract_loco_query("locomotive had 368 days out of service");
        assert!(!result.loco_nos.contains(&"368".to_string()));
    }

    #[test]
    fn raw_matches_sorted_by_start() {
        let result = extract_loco_query("5f8a1c2b3d4e5f6a7b8c9d0e and loco 4430 SD70M");
        let starts: Vec<usize> = result.raw_matches.iter().map(|m| m.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert!(result.raw_matches.iter().all(|m| m.start < m.end));
    }

    #[test]
    fn empty_input_yields_low_confidence_empty_result() {
        let result = extract_loco_query("");
        assert!(result.is_empty());
        assert!(result.raw_matches.is_empty());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn asset_id_wins_confidence() {
        let result = extract_loco_query("check 5f8a1c2b3d4e5f6a7b8c9d0e and loco 4430");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.asset_ids, vec!["5f8a1c2b3d4e5f6a7b8c9d0e"]);
        assert_eq!(result.loco_nos, vec!["4430"]);
    }

    #[test]
    fn end_to_end_due_question() {
        let result = extract_loco_query("When is 4430 due next?");
        assert_eq!(result.loco_nos, vec!["4430"]);
        assert!(result.names.is_empty());
        assert_eq!(result.confidence, Confidence::Medium);
    }
}
