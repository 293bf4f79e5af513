//! Loco-name extraction — layered, most specific first.
//!
//! Layer 1: no-space compounds ("4430SD70M" → "4430 SD70M").
//! Layer 2: number + model phrase ("4430 SD70M", "903 GP38-2 rebuild").
//! Layer 3: bare model tokens near a loco keyword ("the SD70M loco").

use std::sync::LazyLock;

use regex::Regex;
use rh_protocol::{RawMatch, RefKind};

use crate::stopwords::is_stopword;
use crate::text::{
    KEYWORD_WINDOW, is_bare_model_token, is_loco_number_shaped, is_model_like, keyword_spans,
    near_keyword, push_unique, tokenize, trim_token,
};

static RE_COMPOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{3,5})([A-Za-z][A-Za-z0-9/-]{0,15})\b").unwrap());

/// Up to how many tokens after the number a name phrase may extend.
const PHRASE_LOOKAHEAD: usize = 3;

/// Extract loco-name candidates with their raw matches.
pub(crate) fn extract(input: &str) -> (Vec<String>, Vec<RawMatch>) {
    let mut names = Vec::new();
    let mut raw_matches = Vec::new();

    compound_names(input, &mut names, &mut raw_matches);
    phrase_names(input, &mut names, &mut raw_matches);
    bare_model_names(input, &mut names, &mut raw_matches);

    (names, raw_matches)
}

/// Layer 1: a 3–5 digit run glued to a model-looking token. The output
/// name is normalized to `"<number> <model>"`; the raw match keeps the
/// unspaced original text.
fn compound_names(input: &str, names: &mut Vec<String>, raw_matches: &mut Vec<RawMatch>) {
    for caps in RE_COMPOUND.captures_iter(input) {
        let number = &caps[1];
        let model = &caps[2];
        if is_stopword(model) || !is_model_like(model) {
            continue;
        }
        let whole = caps.get(0).unwrap();
        push_unique(names, format!("{number} {model}"));
        raw_matches.push(RawMatch {
            kind: RefKind::Name,
            text: whole.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        });
    }
}

/// Layer 2: a standalone 3–5 digit token followed by up to three
/// tokens, truncated at the first stopword, requiring at least one
/// model-looking token and a final length of two or more tokens.
fn phrase_names(input: &str, names: &mut Vec<String>, raw_matches: &mut Vec<RawMatch>) {
    let tokens = tokenize(input);
    for i in 0..tokens.len() {
        let (number, num_start, num_end) = trim_token(&tokens[i]);
        if !is_loco_number_shaped(number) {
            continue;
        }
        let lookahead = &tokens[i + 1..(i + 1 + PHRASE_LOOKAHEAD).min(tokens.len())];
        if lookahead.is_empty() {
            continue;
        }
        let (second, ..) = trim_token(&lookahead[0]);
        if second.is_empty() || is_stopword(second) {
            continue;
        }

        let mut parts = vec![number];
        let mut part_ends = vec![num_end];
        for token in lookahead {
            let (word, _, word_end) = trim_token(token);
            if word.is_empty() || is_stopword(word) {
                break;
            }
            parts.push(word);
            part_ends.push(word_end);
        }
        if !parts[1..].iter().any(|w| is_model_like(w)) {
            continue;
        }
        while parts.len() > 1 && is_stopword(parts[parts.len() - 1]) {
            parts.pop();
            part_ends.pop();
        }
        if parts.len() < 2 {
            continue;
        }

        let end = part_ends[part_ends.len() - 1];
        push_unique(names, parts.join(" "));
        raw_matches.push(RawMatch {
            kind: RefKind::Name,
            text: input[num_start..end].to_string(),
            start: num_start,
            end,
        });
    }
}

/// Layer 3: an upper-case model code close to a loco keyword, unless it
/// is already part of a captured name.
fn bare_model_names(input: &str, names: &mut Vec<String>, raw_matches: &mut Vec<RawMatch>) {
    let spans = keyword_spans(input);
    if spans.is_empty() {
        return;
    }
    for token in tokenize(input) {
        let (core, start, end) = trim_token(&token);
        if !is_bare_model_token(core) || is_stopword(core) {
            continue;
        }
        if !near_keyword(&spans, start, end, KEYWORD_WINDOW) {
            continue;
        }
        if names.iter().any(|n| n.contains(core)) {
            continue;
        }
        names.push(core.to_string());
        raw_matches.push(RawMatch {
            kind: RefKind::Name,
            text: core.to_string(),
            start,
            end,
        });
    }
}
