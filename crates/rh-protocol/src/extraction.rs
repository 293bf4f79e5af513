use serde::{Deserialize, Serialize};

/// Which kind of locomotive reference a raw match represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    AssetId,
    LocoNo,
    Name,
}

/// A positional match found in the original input.
///
/// `text` is the slice exactly as it appeared (original casing and
/// spacing); `start`/`end` are byte offsets into the input with
/// `start < end`. Used downstream for highlighting and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub kind: RefKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Ordinal trust level for an extraction.
///
/// Variant declaration order matters — `#[derive(Ord)]` uses it,
/// so Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one extraction pass over a single admin question.
///
/// The three candidate lists are de-duplicated in first-seen order;
/// `raw_matches` spans all three extractors, sorted by start offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub input: String,
    pub asset_ids: Vec<String>,
    pub loco_nos: Vec<String>,
    pub names: Vec<String>,
    pub raw_matches: Vec<RawMatch>,
    pub confidence: Confidence,
}

impl ExtractionResult {
    /// True when no candidate of any kind was extracted.
    pub fn is_empty(&self) -> bool {
        self.asset_ids.is_empty() && self.loco_nos.is_empty() && self.names.is_empty()
    }
}
