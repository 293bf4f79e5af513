//! Loco-number extraction — three phases, high precision first.
//!
//! Phase A: keyword-anchored numbers ("loco 4430", "unit no. 903").
//! Phase B: keyword glued to the number ("loco4430").
//! Phase C: remaining standalone 3–5 digit tokens, filtered and scored.
//!
//! A and B are keyword-trusted and accepted unconditionally (even for
//! calendar years). C rejects durations, counts, and years outright,
//! then requires a score of at least 1 from proximity/domain signals —
//! a bare unqualified number is never accepted.

use std::sync::LazyLock;

use regex::Regex;
use rh_protocol::{RawMatch, RefKind};

use crate::text::{
    KEYWORD_WINDOW, day_suffix_follows, has_domain_context, is_calendar_year, is_count_context,
    keyword_spans, near_keyword, push_unique,
};

static RE_PHASE_A: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:locos?|locomotives?|units?|engines?)[\s:#.\-]+(?:no\.?|number|num\.?)?[\s:#.\-]*(\d{3,5})\b",
    )
    .unwrap()
});

static RE_PHASE_B: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:locos?|locomotives?|units?|engines?)(\d{3,5})\b").unwrap());

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{3,5}\b").unwrap());

/// Extract loco-number candidates with their raw matches.
pub(crate) fn extract(input: &str) -> (Vec<String>, Vec<RawMatch>) {
    let mut loco_nos = Vec::new();
    let mut raw_matches = Vec::new();
    let mut taken: Vec<(usize, usize)> = Vec::new();

    // Phases A and B: keyword-trusted, exempt from year rejection.
    for re in [&RE_PHASE_A, &RE_PHASE_B] {
        for caps in re.captures_iter(input) {
            let m = caps.get(1).unwrap();
            if overlaps(&taken, m.start(), m.end()) {
                continue;
            }
            taken.push((m.start(), m.end()));
            push_unique(&mut loco_nos, m.as_str().to_string());
            raw_matches.push(RawMatch {
                kind: RefKind::LocoNo,
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }

    // Phase C: generic heuristic over the remaining standalone numbers.
    let spans = keyword_spans(input);
    let domain = has_domain_context(input);
    for m in RE_NUMBER.find_iter(input) {
        if overlaps(&taken, m.start(), m.end()) {
            continue;
        }
        if day_suffix_follows(input, m.end()) {
            continue;
        }
        if is_count_context(input, m.start(), m.end()) {
            continue;
        }
        let Ok(n) = m.as_str().parse::<u32>() else {
            continue;
        };
        if is_calendar_year(n) {
            continue;
        }

        let mut score = 0;
        if near_keyword(&spans, m.start(), m.end(), KEYWORD_WINDOW) {
            score += 2;
        }
        if input[..m.start()].ends_with('#') {
            score += 1;
        }
        if domain {
            score += 1;
        }
        if score < 1 {
            continue;
        }

        push_unique(&mut loco_nos, m.as_str().to_string());
        raw_matches.push(RawMatch {
            kind: RefKind::LocoNo,
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        });
    }

    (loco_nos, raw_matches)
}

fn overlaps(taken: &[(usize, usize)], start: usize, end: usize) -> bool {
    taken.iter().any(|&(s, e)| start < e && s < end)
}
