//! Tokenizer and heuristic helpers shared by the sub-extractors.
//!
//! All scanning here walks an immutable input string with explicit
//! positions; nothing holds a cursor across calls.

use std::sync::LazyLock;

use regex::Regex;

/// Character window within which a loco keyword lends trust to a nearby
/// number or model token.
pub(crate) const KEYWORD_WINDOW: usize = 25;

/// A whitespace-delimited token with its byte span in the original input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split on whitespace, keeping byte offsets.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &input[s..i],
                    start: s,
                    end: i,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &input[s..],
            start: s,
            end: input.len(),
        });
    }
    tokens
}

fn edge_punct(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '-' || c == '/')
}

/// Strip punctuation from both token edges, returning the core slice
/// and its byte span in the original input. Interior `-` and `/` stay
/// (model designations like GP38-2).
pub(crate) fn trim_token<'a>(token: &Token<'a>) -> (&'a str, usize, usize) {
    let without_lead = token.text.trim_start_matches(edge_punct);
    let lead = token.text.len() - without_lead.len();
    let core = without_lead.trim_end_matches(edge_punct);
    let start = token.start + lead;
    (core, start, start + core.len())
}

/// True for a standalone 3–5 digit run.
pub(crate) fn is_loco_number_shaped(s: &str) -> bool {
    (3..=5).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Calendar years are never accepted as unanchored loco numbers.
pub(crate) fn is_calendar_year(n: u32) -> bool {
    (1900..=2099).contains(&n)
}

static RE_DAY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:d\b|-days?\b|\s+days?\b)").unwrap());

/// "368 days", "368-day", "368d" — a duration, not a loco number.
pub(crate) fn day_suffix_follows(input: &str, end: usize) -> bool {
    RE_DAY_SUFFIX.is_match(&input[end..])
}

const COUNT_VERBS: &[&str] = &["show", "list", "display", "give", "fetch", "get"];
const COUNT_OBJECTS: &[&str] = &[
    "items", "item", "results", "result", "rows", "records", "entries", "lines",
];

/// "top 10", "show 5 items", "number of 20" — a count or limit, not a
/// loco number.
pub(crate) fn is_count_context(input: &str, start: usize, end: usize) -> bool {
    let before: Vec<String> = input[..start]
        .split_whitespace()
        .rev()
        .take(2)
        .map(|w| w.trim_matches(edge_punct).to_ascii_lowercase())
        .collect();
    let after = input[end..]
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(edge_punct).to_ascii_lowercase());

    let Some(prev) = before.first().map(|s| s.as_str()) else {
        return false;
    };
    if prev == "top" || prev == "first" || prev == "limit" {
        return true;
    }
    if prev == "of" && before.get(1).is_some_and(|w| w.as_str() == "number") {
        return true;
    }
    if COUNT_VERBS.contains(&prev)
        && let Some(next) = after
        && COUNT_OBJECTS.contains(&next.as_str())
    {
        return true;
    }
    false
}

static RE_LOCO_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:locos?|locomotives?|units?|engines?)\b").unwrap());

/// Byte spans of every loco keyword occurrence.
pub(crate) fn keyword_spans(input: &str) -> Vec<(usize, usize)> {
    RE_LOCO_KEYWORD
        .find_iter(input)
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Whether a span sits within `window` characters of any keyword span.
pub(crate) fn near_keyword(
    spans: &[(usize, usize)],
    start: usize,
    end: usize,
    window: usize,
) -> bool {
    spans.iter().any(|&(ks, ke)| {
        let gap = if ke <= start {
            start - ke
        } else if end <= ks {
            ks - end
        } else {
            0
        };
        gap <= window
    })
}

static RE_DOMAIN_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)\b(?:
            due | overdue | inspections? | inspect(?:ed)? |
            expir(?:y|es?|ed|ing) | credits? |
            out[\s-]of[\s-](?:use|service) |
            status | schedules? | scheduled | maintenance | servicing | repairs?
        )\b",
    )
    .unwrap()
});

/// Whole-input signal that the question is about fleet upkeep.
pub(crate) fn has_domain_context(input: &str) -> bool {
    RE_DOMAIN_CONTEXT.is_match(input)
}

/// Looks like a model designation: digit/hyphen/slash content, or a
/// short all-caps code. Pure digit runs are other loco numbers, not
/// models.
pub(crate) fn is_model_like(s: &str) -> bool {
    if s.is_empty() || s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if s.chars().any(|c| c.is_ascii_digit() || c == '-' || c == '/') {
        return true;
    }
    s.len() >= 2 && s.chars().all(|c| c.is_ascii_uppercase())
}

/// Stricter shape for standalone model tokens picked up near a keyword:
/// 2–16 chars, alphanumeric with `-`/`/`, upper-case letters, and at
/// least one digit, hyphen, or slash.
pub(crate) fn is_bare_model_token(s: &str) -> bool {
    (2..=16).contains(&s.len())
        && s.chars().any(|c| c.is_ascii_digit() || c == '-' || c == '/')
        && s.chars().any(|c| c.is_ascii_alphabetic())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/')
        && s.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| c.is_ascii_uppercase())
}

/// Push a value unless an equal one is already present (first-seen order).
pub(crate) fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
