//! Asset-ID extraction — fixed-format 24-char hex token scan.

use std::sync::LazyLock;

use regex::Regex;
use rh_protocol::{RawMatch, RefKind};

use crate::text::push_unique;

static RE_ASSET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9a-fA-F]{24}\b").unwrap());

/// Scan for 24-char hexadecimal tokens bounded by word edges.
///
/// Returned IDs are lower-cased and de-duplicated in first-occurrence
/// order; raw matches keep the original casing and spans.
pub(crate) fn extract(input: &str) -> (Vec<String>, Vec<RawMatch>) {
    let mut asset_ids = Vec::new();
    let mut raw_matches = Vec::new();

    for m in RE_ASSET_ID.find_iter(input) {
        push_unique(&mut asset_ids, m.as_str().to_ascii_lowercase());
        raw_matches.push(RawMatch {
            kind: RefKind::AssetId,
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        });
    }

    (asset_ids, raw_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_lowercases() {
        let (ids, raw) = extract("look up 5F8A1C2B3D4E5F6A7B8C9D0E for me");
        assert_eq!(ids, vec!["5f8a1c2b3d4e5f6a7b8c9d0e"]);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].text, "5F8A1C2B3D4E5F6A7B8C9D0E");
        assert_eq!(
            &"look up 5F8A1C2B3D4E5F6A7B8C9D0E for me"[raw[0].start..raw[0].end],
            raw[0].text
        );
    }

    #[test]
    fn dedupes_in_first_seen_order() {
        let (ids, raw) = extract(
            "5f8a1c2b3d4e5f6a7b8c9d0e vs 6a9b2c3d4e5f6a7b8c9d0e1f vs 5F8A1C2B3D4E5F6A7B8C9D0E",
        );
        assert_eq!(
            ids,
            vec!["5f8a1c2b3d4e5f6a7b8c9d0e", "6a9b2c3d4e5f6a7b8c9d0e1f"]
        );
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn rejects_wrong_lengths_and_non_hex() {
        let (ids, _) = extract("5f8a1c2b3d4e5f6a7b8c9d0 and 5f8a1c2b3d4e5f6a7b8c9d0ef");
        assert!(ids.is_empty());
        let (ids, _) = extract("zf8a1c2b3d4e5f6a7b8c9d0e");
        assert!(ids.is_empty());
    }

    #[test]
    fn requires_word_boundaries() {
        let (ids, _) = extract("x5f8a1c2b3d4e5f6a7b8c9d0e");
        assert!(ids.is_empty());
    }
}
